use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde_json::json;

use foia_report::config::Config;
use foia_report::context::AppContext;
use foia_report::logging;
use foia_report::types::DataTypeSelection;

#[derive(Parser, Debug)]
#[command(name = "foia-report", version, about = "Fetch quarterly FOIA report data")]
struct Cli {
    /// Config file (default: <config dir>/foia-report/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Agency abbreviation
    #[arg(long = "agency")]
    agencies: Vec<String>,

    /// Agency component abbreviation
    #[arg(long = "component")]
    components: Vec<String>,

    /// Report on every agency
    #[arg(long)]
    all_agencies: bool,

    #[arg(long = "fiscal-year")]
    fiscal_years: Vec<String>,

    #[arg(long = "quarter")]
    quarters: Vec<String>,

    /// Data type id from the catalog
    #[arg(long = "data-type", required = true)]
    data_types: Vec<String>,

    /// Include agency overall figures for selected agencies
    #[arg(long)]
    overall: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let ctx = AppContext::from_config(&config)?;

    let catalog = ctx.actions.fetch_data_types().join();
    let needs_finder =
        !cli.all_agencies && !(cli.agencies.is_empty() && cli.components.is_empty());
    if needs_finder {
        futures::try_join!(catalog, ctx.actions.fetch_agency_finder_data().join())?;
    } else {
        catalog.await?;
    }

    apply_selections(&ctx, &cli)?;

    let form = ctx.form.get_state();
    let handles = ctx
        .actions
        .fetch_quarterly_report_data(&form.selected_data_types);
    let results = futures::future::join_all(handles.into_iter().map(|handle| async move {
        let type_id = handle.label().to_string();
        (type_id, handle.join().await)
    }))
    .await;

    let mut failed = 0;
    let groups: Vec<_> = results
        .iter()
        .map(|(type_id, result)| match result {
            Ok(summary) => json!({
                "type_id": type_id,
                "pages": summary.pages,
                "items": summary.items,
            }),
            Err(e) => {
                failed += 1;
                json!({ "type_id": type_id, "error": e.to_string() })
            }
        })
        .collect();

    let output = json!({
        "groups": groups,
        "reports": ctx.report_data.get_state().reports,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    if failed > 0 {
        bail!("{} of {} data type groups failed", failed, results.len());
    }
    Ok(())
}

/// Fill the form store from command line selections, then validate it.
fn apply_selections(ctx: &AppContext, cli: &Cli) -> Result<()> {
    let actions = &ctx.actions;

    if cli.all_agencies {
        actions.toggle_select_all_agencies();
    } else {
        let finder = ctx.agency_finder.get_state();
        let mut rows = Vec::new();
        for abbreviation in &cli.agencies {
            let mut entry = finder
                .selection_for_agency(abbreviation)
                .with_context(|| format!("Unknown agency '{}'", abbreviation))?;
            for component in entry.components.iter_mut().filter(|c| c.is_overall) {
                component.selected = cli.overall;
            }
            rows.push(entry);
        }
        for abbreviation in &cli.components {
            rows.push(
                finder
                    .selection_for_component(abbreviation)
                    .with_context(|| format!("Unknown agency component '{}'", abbreviation))?,
            );
        }
        // The form starts with one blank row; later rows are appended first.
        for (index, entry) in rows.into_iter().enumerate() {
            if index > 0 {
                actions.append_blank_agency();
            }
            actions.update_selected_agency(index, entry);
        }
    }

    let catalog = ctx.data_types.get_state();
    let mut data_types = Vec::new();
    for id in &cli.data_types {
        let descriptor = catalog
            .data_type(id)
            .with_context(|| format!("Unknown data type '{}'", id))?;
        data_types.push(DataTypeSelection::from_descriptor(descriptor));
    }
    for (index, data_type) in data_types.into_iter().enumerate() {
        if index > 0 {
            actions.append_blank_data_type();
        }
        actions.update_data_type(index, data_type);
    }

    actions.update_selected_fiscal_years(cli.fiscal_years.clone());
    actions.update_selected_quarters(cli.quarters.clone());
    actions.validate_form();

    let Some(validation) = ctx.form.get_state().validation else {
        bail!("Form was not validated");
    };
    if !validation.agencies {
        bail!("Select at least one agency or component, or --all-agencies");
    }
    if !validation.data_types {
        bail!("Select at least one data type");
    }
    if !validation.fiscal_years {
        bail!("Select at least one fiscal year");
    }
    Ok(())
}

