use std::env;

fn main() {
    let api_url =
        env::var("CHESS_API_URL").unwrap_or_else(|_| String::from("https://api.chess.com/pub"));

    println!("cargo:rerun-if-env-changed=CHESS_API_URL");
    println!("cargo:rustc-env=CHESS_API_URL={}", api_url);
}
