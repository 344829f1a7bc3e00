use identity_did_key::DIDKey;
use std::env;

fn main() {
    let Some(did) = env::args().nth(1) else {
        eprintln!("usage: resolve-key <did:key:...>");
        std::process::exit(1);
    };

    match DIDKey::resolve(&did) {
        Ok(doc) => println!(
            "{}",
            serde_json::to_string_pretty(&doc).expect("Couldn't serialize DID Document")
        ),
        Err(e) => {
            eprintln!("Couldn't resolve {did}: {e}");
            std::process::exit(1);
        }
    }
}
