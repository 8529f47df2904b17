use loadplan_core::Result;
use loadplan_plan::{metrics, project, scale};
use std::path::Path;

pub fn execute(file: &Path, vu: f64, time: f64, format: &str) -> Result<()> {
    let plan = loadplan_config::load_plan(file)?;
    let derived = scale(&plan, vu, time);
    let points = project(&derived);

    match format {
        "csv" => {
            let keys = metrics::discover(&derived.phases);
            let mut header = vec![
                "time".to_string(),
                "formattedTime".to_string(),
                "phaseName".to_string(),
            ];
            header.extend(keys.iter().cloned());
            println!("{}", header.join(","));

            for point in &points {
                let mut row = vec![
                    point.time.to_string(),
                    point.formatted_time.clone(),
                    point.phase_name.clone(),
                ];
                row.extend(keys.iter().map(|key| point.metrics.value(key).to_string()));
                println!("{}", row.join(","));
            }
        }
        _ => println!("{}", serde_json::to_string_pretty(&points)?),
    }
    Ok(())
}
