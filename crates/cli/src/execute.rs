use crate::commands::Commands;
use loadplan_core::Result;

impl Commands {
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Validate { file } => crate::commands::validate::execute(&file),
            Commands::Summary { file } => crate::commands::summary::execute(&file),
            Commands::Scale {
                file,
                vu,
                time,
                allow_zero,
                output,
            } => crate::commands::scale::execute(&file, vu, time, allow_zero, output.as_deref()),
            Commands::Chart {
                file,
                vu,
                time,
                format,
            } => crate::commands::chart::execute(&file, vu, time, &format),
        }
    }
}
