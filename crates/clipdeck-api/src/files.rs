// crates/clipdeck-api/src/files.rs
//
// Media asset URL join: the backend serves stored objects at
// /v1/files/out/<objectKey>. Each path segment is percent-encoded on its
// own so slashes inside the key survive as path separators.

/// Returns the relative asset URL for an object key, or an empty string for
/// a blank key (matches the server contract — no key, no asset).
pub fn file_out_url(object_key: &str) -> String {
    if object_key.trim().is_empty() {
        return String::new();
    }
    let safe: Vec<String> = object_key.split('/').map(encode_segment).collect();
    format!("/v1/files/out/{}", safe.join("/"))
}

/// Same URL with the attachment-disposition flag.
pub fn file_out_download_url(object_key: &str) -> String {
    let url = file_out_url(object_key);
    if url.is_empty() {
        url
    } else {
        format!("{url}?download=1")
    }
}

/// Percent-encode one path segment. Unreserved characters (RFC 3986) pass
/// through; everything else, slash included, becomes %XX per UTF-8 byte.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keys_pass_through() {
        assert_eq!(file_out_url("media/abc/clip.mp4"), "/v1/files/out/media/abc/clip.mp4");
    }

    #[test]
    fn segments_are_encoded_but_slashes_survive() {
        assert_eq!(
            file_out_url("media/my clip#1/out.mp4"),
            "/v1/files/out/media/my%20clip%231/out.mp4"
        );
    }

    #[test]
    fn blank_key_yields_empty_url() {
        assert_eq!(file_out_url(""), "");
        assert_eq!(file_out_url("   "), "");
        assert_eq!(file_out_download_url(""), "");
    }

    #[test]
    fn download_variant_appends_flag() {
        assert_eq!(
            file_out_download_url("media/a.mp4"),
            "/v1/files/out/media/a.mp4?download=1"
        );
    }

    #[test]
    fn multibyte_is_encoded_per_byte() {
        assert_eq!(file_out_url("clips/é.mp4"), "/v1/files/out/clips/%C3%A9.mp4");
    }
}
