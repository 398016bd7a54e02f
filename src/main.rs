use std::path::Path;
use std::process::ExitCode;

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use device_price_checker::catalog::{Catalog, CATALOG_FILE};
use device_price_checker::domain::models::{OsName, SearchCriterion};
use device_price_checker::error::Result;
use device_price_checker::report::{print_report, write_csv, OUTPUT_FILE};
use device_price_checker::service::aggregator::{aggregate, PACING_DELAY};
use device_price_checker::service::EbayMarketplace;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::builder()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let catalog = Catalog::load(Path::new(CATALOG_FILE))?;
    let criterion = prompt_criterion()?;

    let candidates = catalog.select_candidates(&criterion);
    println!(
        "Checking {} device(s) against eBay UK...",
        candidates.len()
    );

    let marketplace = EbayMarketplace::new()?;
    let rows = aggregate(&candidates, &marketplace, PACING_DELAY).await?;

    print_report(&mut std::io::stdout(), &rows)?;

    let output = Path::new(OUTPUT_FILE);
    write_csv(output, &rows)?;
    println!("\nResults saved to {}", output.display());
    Ok(())
}

fn prompt_criterion() -> Result<SearchCriterion> {
    let theme = ColorfulTheme::default();
    let choice = Select::with_theme(&theme)
        .with_prompt("What would you like to search by?")
        .items(&["OS", "Brand", "Model"])
        .default(0)
        .interact()
        .map_err(anyhow::Error::from)?;

    let criterion = match choice {
        0 => {
            let os: String = Input::with_theme(&theme)
                .with_prompt("Enter the OS you are looking for (GrapheneOS, CalyxOS, eOS, LineageOS)")
                .interact_text()
                .map_err(anyhow::Error::from)?;
            SearchCriterion::Os(os.parse::<OsName>()?)
        }
        1 => {
            let brand: String = Input::with_theme(&theme)
                .with_prompt("Enter the brand (e.g., Google, Samsung, OnePlus)")
                .interact_text()
                .map_err(anyhow::Error::from)?;
            SearchCriterion::Brand(brand)
        }
        _ => {
            let model: String = Input::with_theme(&theme)
                .with_prompt("Enter the model name (e.g., Pixel 7 Pro, Galaxy S21)")
                .interact_text()
                .map_err(anyhow::Error::from)?;
            SearchCriterion::Model(model)
        }
    };
    Ok(criterion)
}
