use serde::{Deserialize, Serialize};

use super::value::Scalar;

/// Free-form property bag of a component, stored exactly as the editor wrote it.
pub type Props = serde_json::Map<String, serde_json::Value>;

/// Layout keys every component type accepts.
pub const COMMON_KEYS: &[&str] = &[
    "width",
    "marginTop",
    "marginRight",
    "marginBottom",
    "marginLeft",
];

/// Defines the closed set of component types: wire name, palette label and the
/// property keys the editor writes for that type.
macro_rules! define_component_types {
    (
        $( ($variant:ident, $name:literal, $label:literal, [ $( $key:literal ),* $(,)? ]) ),*
        $(,)?
    ) => {
        /// The kind of a component. Serialized as its snake_case wire name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ComponentType {
            $( $variant, )*
        }

        impl ComponentType {
            /// Every component type, in palette order.
            pub const ALL: &'static [ComponentType] = &[ $( ComponentType::$variant, )* ];

            /// The wire name used in persisted documents.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( ComponentType::$variant => $name, )*
                }
            }

            /// The human-facing palette label.
            pub fn label(&self) -> &'static str {
                match self {
                    $( ComponentType::$variant => $label, )*
                }
            }

            /// Property keys specific to this type, excluding [`COMMON_KEYS`].
            pub fn recognized_keys(&self) -> &'static [&'static str] {
                match self {
                    $( ComponentType::$variant => &[ $( $key ),* ], )*
                }
            }

            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $name => Some(ComponentType::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

define_component_types! {
    (Text, "text", "Text Block", ["text", "dataBind_text", "size", "bold", "align", "color"]),
    (Button, "button", "Button", [
        "label", "text", "dataBind_text", "actionType", "targetScreenId", "urlTarget",
        "backgroundColor", "color",
    ]),
    (Image, "image", "Image", ["src", "dataBind_src", "height"]),
    (Video, "video", "YouTube", ["src"]),
    (ProductGrid, "product_grid", "Product Grid", [
        "gridColumns", "bind_image", "bind_title", "bind_subtitle", "buttonText",
        "filterColumn", "filterValue", "limit", "itemActionType", "itemTargetScreenId",
    ]),
    (Slider, "slider", "Carousel", ["src", "slides", "dataBind_src", "dataBind_text"]),
    (Webview, "webview", "Web View", ["src", "sizeMode", "height"]),
    (Spacer, "spacer", "Spacer", ["height"]),
    (Container, "container", "Container", ["style", "height"]),
    (Chart, "chart", "Chart", []),
    (BottomNav, "bottom_nav", "NavBar", []),
    (Toolbar, "toolbar", "Toolbar", [
        "title", "showBack", "backTarget", "backgroundColor", "textColor",
    ]),
    (ProductDetail, "product_detail", "Detail Card", [
        "src", "title", "price", "description", "dataBind_src", "dataBind_image",
        "dataBind_title", "dataBind_price", "dataBind_desc", "dataBind_description",
        "whatsappNumber", "buttonLabel",
    ]),
    (NewsGrid, "news_grid", "News Grid", [
        "gridColumns", "bind_image", "bind_title", "bind_date", "bind_summary",
        "filterColumn", "filterValue", "limit", "actionTarget",
    ]),
    (NewsDetail, "news_detail", "News Detail", [
        "src", "title", "date", "description", "dataBind_src", "dataBind_image",
        "dataBind_title", "dataBind_date", "dataBind_content",
    ]),
}

impl Serialize for ComponentType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComponentType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        ComponentType::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown component type '{}'", name)))
    }
}

impl std::fmt::Display for ComponentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ComponentType {
    /// Whether `key` is a key this type (or every type) understands.
    pub fn is_recognized(&self, key: &str) -> bool {
        COMMON_KEYS.contains(&key) || self.recognized_keys().contains(&key)
    }

    /// List-rendering types iterate every dataset row.
    pub fn is_list(&self) -> bool {
        matches!(self, ComponentType::ProductGrid | ComponentType::NewsGrid)
    }
}

/// A typed, configurable UI element placed within a screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ComponentType,
    #[serde(default)]
    pub props: Props,
    /// Reserved for nesting; no current type renders children.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Component>>,
}

impl Component {
    /// Creates a component with empty props.
    pub fn new(id: impl Into<String>, kind: ComponentType) -> Self {
        Self {
            id: id.into(),
            kind,
            props: Props::new(),
            children: None,
        }
    }

    /// Builder-style helper to set a prop.
    pub fn with_prop(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn prop(&self, key: &str) -> Option<&serde_json::Value> {
        self.props.get(key)
    }

    /// A prop rendered as display text. Empty strings, `false` and non-scalars
    /// count as unset, the same way the editor treats them.
    pub fn prop_text(&self, key: &str) -> Option<String> {
        match self.props.get(key)? {
            serde_json::Value::Bool(false) => None,
            value => Scalar::from_json(value)
                .filter(|s| !s.is_blank())
                .map(|s| s.to_string()),
        }
    }

    /// The column name a binding key points at, if set.
    pub fn bound_column(&self, key: &str) -> Option<String> {
        self.props
            .get(key)
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }

    pub fn prop_u64(&self, key: &str) -> Option<u64> {
        match self.props.get(key)? {
            serde_json::Value::Number(n) => n
                .as_u64()
                .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64)),
            serde_json::Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn prop_bool(&self, key: &str) -> Option<bool> {
        self.props.get(key).and_then(|v| v.as_bool())
    }
}
