/**
 * Avatar Derivation
 *
 * Every account gets a Gravatar URL derived from its email at registration:
 * md5 over the trimmed, lowercased address, sized 200px, rated pg, with the
 * "mystery man" fallback. Identical emails always derive identical URLs; no
 * network call is involved.
 */

use md5::{Digest, Md5};

pub fn gravatar_url(email: &str) -> String {
    let normalized = email.trim().to_lowercase();
    let digest = Md5::digest(normalized.as_bytes());
    let hash: String = digest.iter().map(|byte| format!("{byte:02x}")).collect();

    format!("https://www.gravatar.com/avatar/{hash}?s=200&r=pg&d=mm")
}
