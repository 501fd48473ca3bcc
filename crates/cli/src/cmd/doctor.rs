use super::Context;
use blogfm_core::config::default_config_path;

pub fn run(ctx: &Context) {
    let path = ctx
        .config_path
        .clone()
        .unwrap_or_else(default_config_path)
        .display()
        .to_string();

    match &ctx.config {
        Ok(rc) => {
            println!("OK   blogfm doctor");
            println!("version: {}", blogfm_core::version());
            println!("path: {}", path);
            println!("profile: {}", rc.active_profile);
            println!("blog_root: {}", ctx.blog_root().display());
            println!(
                "mapping_file: {}",
                rc.mapping_file.as_ref().map_or("(none)".to_string(), |p| p.display().to_string())
            );
            println!(
                "rules_file: {}",
                rc.rules_file
                    .as_ref()
                    .map_or("(built-in)".to_string(), |p| p.display().to_string())
            );
            println!("tag_key: {}", rc.tag_key);
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL blogfm doctor");
            println!("{e}");
            if ctx.config_path.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}
