use std::error::Error;
use std::fs;

use env_logger::Env;
use inistore::{IniSession, LocalStorage, SessionSettings};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let ini_content = r#"
; proxy preferences
[General]
api_mode=false
api_access_token=password
default_url=
enable_insert=true

[Proxy]
test=trojan,example.com,443,password,tls-verification=false
"#;

    let dir = tempfile::tempdir()?;
    let path = dir.path().join("pref.ini");
    fs::write(&path, ini_content)?;
    let location = path.to_str().ok_or("temporary path is not UTF-8")?;

    let settings = SessionSettings::from_toml("line_ending = \"lf\"")?;
    let mut session = IniSession::open_with_settings(LocalStorage::new(), location, &settings)?;

    println!("Sections: {:?}", session.document().section_names().collect::<Vec<_>>());
    println!("API mode: {:?}", session.get_bool("General", "api_mode"));
    println!("Proxy entries: {:?}", session.section_entries("Proxy"));

    session.set_value("Proxy", "test2", "vmess,example.org,8080,uuid=0000")?;
    session.delete_key("General", "default_url")?;
    println!("Changes pending: {}", session.changes_pending());

    session.enable_autosave()?;
    println!("\nSaved INI:\n{}", fs::read_to_string(&path)?);

    session.set_value("General", "api_mode", "true")?;
    session.reload()?;
    println!("API mode after reload: {:?}", session.get_bool("General", "api_mode"));

    Ok(())
}
