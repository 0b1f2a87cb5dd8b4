//! Print the Backstage OpenAPI document, or write it to the path given as
//! the first argument.

use server::openapi::ApiDoc;
use utoipa::OpenApi;

fn main() {
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .expect("Failed to serialize OpenAPI document to JSON");

    match std::env::args().nth(1) {
        Some(path) => {
            std::fs::write(&path, doc).expect("Failed to write OpenAPI document");
            eprintln!("Wrote OpenAPI document to {path}");
        }
        None => println!("{doc}"),
    }
}
