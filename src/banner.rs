// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
                 _                 _
  _____   ____ _| |_ __ ___   ___ | | __
 / _ \ \ / / _` | | '_ ` _ \ / _ \| |/ /
|  __/\ V / (_| | | | | | | | (_) |   <
 \___| \_/ \__,_|_|_| |_| |_|\___/|_|\_\

    Eval Service HTTP Test Double
"#;
    println!("{}", banner);
}
