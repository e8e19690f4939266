use uuid::Uuid;

/// A fresh random (version 4) identifier in hyphenated lowercase form.
pub fn uuid() -> String {
    Uuid::new_v4().to_string()
}

/// True for the 8-4-4-4-12 lowercase hex layout that `uuid()` produces.
pub fn is_canonical_uuid(text: &str) -> bool {
    const GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

    if text.len() != 36 {
        return false;
    }

    let mut parts = text.split('-');
    for expected in GROUPS {
        match parts.next() {
            Some(part)
                if part.len() == expected
                    && part.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) => {}
            _ => return false,
        }
    }
    parts.next().is_none()
}
