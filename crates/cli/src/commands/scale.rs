use loadplan_core::Result;
use loadplan_plan::{scale_with_policy, ScalePolicy};
use std::path::Path;
use tracing::info;

pub fn execute(
    file: &Path,
    vu: f64,
    time: f64,
    allow_zero: bool,
    output: Option<&Path>,
) -> Result<()> {
    let plan = loadplan_config::load_plan(file)?;
    let derived = scale_with_policy(&plan, vu, time, ScalePolicy { allow_zero });

    match output {
        Some(path) => {
            loadplan_config::save_plan(path, &derived)?;
            info!(path = %path.display(), "wrote scaled plan");
        }
        None => println!("{}", loadplan_config::to_json_string(&derived)?),
    }
    Ok(())
}
