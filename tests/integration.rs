//! Integration tests for Bindery
//!
//! End-to-end flows across templates, the data pipeline, binding and preview.
//!
mod common;
use bindery::error::DocumentError;
use bindery::prelude::*;
use bindery::template::DETAIL_SCREEN_ID;
use common::*;
use std::result::Result;
use std::sync::Arc;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_shop_template_against_demo_data() {
        let mut store = DocumentStore::new(vec![Screen::new("old", "Old")]);
        store.load_template(BuiltinTemplate::Ecommerce.screens());
        assert_eq!(store.active_screen_id(), "screen-home");

        let mut source = DataSource::builder()
            .sheet_id("DEMO")
            .fetcher(Arc::new(FakeFetcher::failing()))
            .build()
            .expect("source builds");
        assert_eq!(source.fetch_data().await.unwrap(), Some(FetchOrigin::Demo));

        let resolver = BindingResolver::new(source.dataset());
        let grid = store.active_screen().unwrap().component("comp-grid").unwrap();
        let titles: Vec<String> = resolver
            .product_cards(grid)
            .into_iter()
            .map(|c| c.title.value)
            .collect();
        assert_eq!(titles, ["Sepatu Nike", "Baju Adidas", "Topi Puma"]);

        store.set_preview_mode(true);
        let outcome = Preview::new(&mut store, source.dataset_mut()).activate_item("comp-grid", 2);
        assert_eq!(
            outcome,
            ActionOutcome::Navigated {
                screen_id: DETAIL_SCREEN_ID.to_string()
            }
        );

        let resolver = BindingResolver::new(source.dataset());
        let detail = store.active_screen().unwrap();
        let title = resolver.text(detail.component("comp-detail-title").unwrap());
        assert_eq!(title.value, "Topi Puma");
        assert!(title.source.is_bound());

        let outcome = Preview::new(&mut store, source.dataset_mut()).click("comp-detail-buy");
        let ActionOutcome::OpenUrl { url } = outcome else {
            panic!("expected link, got {:?}", outcome);
        };
        assert!(url.ends_with("saya mau beli Topi Puma harga Rp 100.000"));
    }

    #[test]
    fn test_every_builtin_template_resolves() {
        let dataset = shop_dataset();
        let resolver = BindingResolver::new(&dataset);
        for template in BuiltinTemplate::ALL {
            let screens = template.screens();
            assert!(!screens.is_empty());
            for screen in &screens {
                for component in &screen.components {
                    let text = ProvenanceFormatter::format_component(&resolver.resolve(component));
                    assert!(text.starts_with(&component.id));
                }
            }
        }
    }

    #[test]
    fn test_project_file_save_and_load() {
        let path = std::env::temp_dir()
            .join(format!("bindery-project-{}.json", std::process::id()));
        let path = path.to_str().unwrap().to_string();

        let project = ProjectFile::new(BuiltinTemplate::Starter.screens());
        project.save(&path).unwrap();
        let loaded = ProjectFile::load(&path).unwrap();
        assert_eq!(loaded, project);

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("{\n  \"screens\""));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_project_file_accepts_bare_screen_array() {
        let json = r#"[{"id": "screen-home", "name": "Home", "components": [
            {"id": "c1", "type": "news_grid", "props": {"bind_title": "Title"}}
        ]}]"#;
        let project = ProjectFile::from_json(json).unwrap();
        assert_eq!(project.screens[0].components[0].kind, ComponentType::NewsGrid);

        let store = DocumentStore::new(project.into_screens().unwrap());
        assert_eq!(store.active_screen_id(), "screen-home");
    }

    #[test]
    fn test_project_file_errors() {
        assert!(matches!(
            ProjectFile::from_json(
                r#"{"screens": [{"id": "s", "name": "S",
                    "components": [{"id": "c", "type": "carousel3d"}]}]}"#
            ),
            Err(DocumentError::JsonParseError(_))
        ));
        assert!(matches!(
            ProjectFile::load("/definitely/not/here.json"),
            Err(DocumentError::Io { .. })
        ));
    }

    #[test]
    fn test_custom_format_conversion() {
        struct Outline(Vec<&'static str>);

        impl IntoScreens for Outline {
            fn into_screens(self) -> Result<Vec<Screen>, DocumentError> {
                if self.0.is_empty() {
                    return Err(DocumentError::ConversionError("empty outline".to_string()));
                }
                Ok(self
                    .0
                    .into_iter()
                    .map(|name| Screen::new(format!("screen-{}", name.to_lowercase()), name))
                    .collect())
            }
        }

        let mut store = DocumentStore::default();
        store.load_template(Outline(vec!["Home", "Cart"]).into_screens().unwrap());
        assert_eq!(store.active_screen_id(), "screen-home");
        assert_eq!(store.screens().len(), 2);

        assert!(matches!(
            Outline(vec![]).into_screens(),
            Err(DocumentError::ConversionError(_))
        ));
    }

    #[test]
    fn test_document_serializes_camel_case() {
        let store = DocumentStore::new(BuiltinTemplate::Starter.screens());
        let json = serde_json::to_value(store.document()).unwrap();
        assert_eq!(json["activeScreenId"], "screen-home");
        assert_eq!(json["isPreviewMode"], false);
        assert_eq!(json["screens"][0]["components"][1]["type"], "product_grid");
        assert!(json["screens"][0]["components"][0].get("children").is_none());
    }
}
