// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

/// Normalize a candidate name as returned by a data source: lower-case,
/// then strip at most one leading wildcard/percent marker and at most one
/// leading dot. Strings shorter than two characters pass through
/// unchanged. Not full hostname canonicalization - no punycode, no
/// trailing-dot handling.
#[inline]
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    if lowered.len() < 2 {
        return lowered;
    }

    // Each prefix class is stripped once, never repeatedly.
    let stripped = lowered.strip_prefix(['*', '%']).unwrap_or(&lowered);
    let stripped = stripped.strip_prefix('.').unwrap_or(stripped);
    stripped.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_markers() {
        assert_eq!(normalize("*.Example.COM"), "example.com");
        assert_eq!(normalize("%www.Foo.org"), "www.foo.org");
        assert_eq!(normalize(".bar.net"), "bar.net");
    }

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(normalize("a"), "a");
        assert_eq!(normalize("*"), "*");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn strips_each_prefix_class_at_most_once() {
        // leading '*' goes first, then the '.' it exposed; the second
        // marker survives
        assert_eq!(normalize("*.%.test"), "%.test");
        assert_eq!(normalize("**.example.com"), "*.example.com");
    }

    #[test]
    fn idempotent_on_typical_names() {
        for raw in [
            "*.Example.COM",
            "%www.Foo.org",
            ".bar.net",
            "a",
            "",
            "already.clean.example.com",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }
}
