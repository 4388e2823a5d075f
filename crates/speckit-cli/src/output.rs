use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Line-oriented `KEY: value` output for scripts and agents.
pub fn print_kv(pairs: &[(&str, String)]) {
    for (key, value) in pairs {
        println!("{key}: {value}");
    }
}
