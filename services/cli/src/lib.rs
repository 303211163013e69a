mod cli;
mod infra;
mod render;

use fcd_checklist::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
