use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::history::HistoryStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = HistoryStore::new(&cfg.history_file);
        ExportLogic::export(&store, *format, file, range, *force)?;
    }
    Ok(())
}
