use rota_core::config::loader::{default_config_path, ConfigLoader};
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load_or_default(config) {
        Ok(rc) => {
            println!("OK   rota doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("wizard.free_by_default: {}", rc.free_by_default);
            println!(
                "export.dir: {}",
                rc.export_dir
                    .as_ref()
                    .map_or_else(|| "(home directory)".to_string(), |p| p.display().to_string())
            );
            println!("logging.level: {}", rc.logging.level);
            match rc.logging.file {
                Some(ref file) => println!("logging.file: {}", file.display()),
                None => println!("logging.file: (stderr only)"),
            }
        }
        Err(e) => {
            println!("FAIL rota doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
