use loadplan_core::Result;
use loadplan_plan::duration;
use std::path::Path;

pub fn execute(file: &Path) -> Result<()> {
    let plan = loadplan_config::load_plan(file)?;
    let total = duration::total_duration(&plan.phases);
    println!(
        "{}: {} phases, {} total",
        plan.plan_name,
        plan.phase_count(),
        duration::format(total)
    );
    Ok(())
}
