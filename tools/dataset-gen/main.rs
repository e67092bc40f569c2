use bindery::data::{Row, Table};
use bindery::model::Scalar;
use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use std::fs;

const PRODUCTS: &[&str] = &[
    "Sepatu", "Baju", "Topi", "Tas", "Jaket", "Celana", "Kaos", "Sandal", "Jam", "Kacamata",
];
const BRANDS: &[&str] = &["Nike", "Adidas", "Puma", "Reebok", "Uniqlo", "Eiger"];
const CATEGORIES: &[&str] = &["Fashion", "Sport", "Outdoor", "Aksesoris"];

/// A CLI tool to generate product datasets for the bindery inspector
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_dataset.json")]
    output: String,

    /// Number of rows to generate
    #[arg(short, long, default_value_t = 12)]
    rows: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!("Generating {} product row(s)...", cli.rows);

    let columns = ["Title", "Image", "Price", "Description", "Category"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let rows = (0..cli.rows).map(|i| generate_row(&mut rng, i)).collect();
    let table = Table::new(columns, rows);

    let json_output = serde_json::to_string_pretty(&table)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved dataset to '{}'", cli.output);
    Ok(())
}

fn pick(rng: &mut ThreadRng, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or_default()
}

fn generate_row(rng: &mut ThreadRng, index: usize) -> Row {
    let product = pick(rng, PRODUCTS);
    let brand = pick(rng, BRANDS);
    let price = rng.random_range(5..=150) * 10_000;

    let mut row = Row::new();
    row.insert("Title".to_string(), Scalar::from(format!("{} {}", product, brand)));
    row.insert(
        "Image".to_string(),
        Scalar::from(format!("https://placehold.co/400x400/png?text={}+{}", product, index + 1)),
    );
    row.insert("Price".to_string(), Scalar::from(format!("Rp {}", format_thousands(price))));
    row.insert(
        "Description".to_string(),
        Scalar::from(format!("{} {} pilihan, stok terbatas", product, brand)),
    );
    row.insert("Category".to_string(), Scalar::from(pick(rng, CATEGORIES)));
    row
}

/// `1250000` -> `1.250.000`
fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
