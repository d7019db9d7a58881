use schemalect_lib::DialectId;

pub fn run() {
    print!("{}", render_dialects());
}

/// One line per dialect: name, emission family, imported package.
pub fn render_dialects() -> String {
    let mut out = format!("Supported dialects ({}):\n", DialectId::ALL.len());
    for dialect in DialectId::ALL {
        out.push_str(&format!(
            "  {:<12} {:<20} {}\n",
            dialect.name(),
            dialect.family().to_string(),
            dialect.package()
        ));
    }
    out
}
