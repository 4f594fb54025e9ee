use crate::cli::commands::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::access::require_admin;
use crate::core::view::visible_to;
use crate::db::log::ttlog;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::role::Caller;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config, caller: &Caller) -> AppResult<()> {
    match cmd {
        Commands::Export {
            format,
            file,
            range,
            force,
        } => {
            let (_pool, repo) = open_repository(cfg)?;
            let visible = visible_to(caller, repo.appointments.all());

            let written = ExportLogic::export(&visible, *format, file, range, *force)?;
            if written > 0 {
                info(format!("{written} appointments exported as {}.", format.as_str()));
            }
        }

        Commands::Import { file } => {
            require_admin(caller, "import appointments")?;

            let (mut pool, mut repo) = open_repository(cfg)?;
            let (imported, skipped) = ExportLogic::import(&mut repo.appointments, file)?;
            repo.save(&mut pool)?;
            ttlog(
                &pool.conn,
                "import",
                file,
                &format!("{imported} imported, {skipped} skipped"),
            )?;
            success(format!(
                "Imported {imported} appointments ({skipped} already present)."
            ));
        }

        _ => {}
    }

    Ok(())
}
