use loadplan_core::Result;
use loadplan_plan::{duration, metrics, notes};
use std::path::Path;

pub fn execute(file: &Path) -> Result<()> {
    let plan = loadplan_config::load_plan(file)?;
    let keys = metrics::discover(&plan.phases);
    let labels = notes::decode(&plan.defaults.notes);

    println!("{}", plan.plan_name);
    println!("version {}, nodes {}", plan.version, plan.nodes);

    println!();
    println!("metrics:");
    for key in &keys {
        match labels.get(key) {
            Some(label) => println!("  {key} ({label})"),
            None => println!("  {key}"),
        }
    }

    println!();
    println!("phases:");
    for phase in &plan.phases {
        let peak = keys.iter().map(|key| phase.metric(key)).fold(0.0, f64::max);
        println!("  {:<44} {:>6}  peak {}", phase.name, phase.duration, peak);
    }

    println!();
    println!(
        "total duration: {}",
        duration::format(duration::total_duration(&plan.phases))
    );
    Ok(())
}
