use base64::{engine::general_purpose::STANDARD, Engine};

/// Platform descriptor of a Windows desktop client, byte for byte as the
/// Riot Client sends it (CRLF line endings, tab indentation)
pub const CLIENT_PLATFORM_JSON: &str = "{\r\n\t\"platformType\": \"PC\",\r\n\t\"platformOS\": \"Windows\",\r\n\t\"platformOSVersion\": \"10.0.19042.1.256.64bit\",\r\n\t\"platformChipset\": \"Unknown\"\r\n}";

/// Value of the `X-Riot-ClientPlatform` header
pub fn client_platform() -> String {
    STANDARD.encode(CLIENT_PLATFORM_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_platform_matches_riot_client() {
        assert_eq!(
            client_platform(),
            "ew0KCSJwbGF0Zm9ybVR5cGUiOiAiUEMiLA0KCSJwbGF0Zm9ybU9TIjogIldpbmRvd3MiLA0KCSJwbGF0Zm9ybU9TVmVyc2lvbiI6ICIxMC4wLjE5MDQyLjEuMjU2LjY0Yml0IiwNCgkicGxhdGZvcm1DaGlwc2V0IjogIlVua25vd24iDQp9"
        );
    }
}
