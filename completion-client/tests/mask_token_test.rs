//! Tests for the token masking used in log lines: long keys keep only their
//! head and tail, short keys disappear entirely.

use completion_client::mask_token;

#[test]
fn short_tokens_are_fully_hidden() {
    // Anything up to 11 characters carries too little around the mask.
    for token in ["", "x", "sk-abc", "eleven-char"] {
        assert_eq!(mask_token(token), "***", "token: {token:?}");
    }
}

#[test]
fn long_tokens_keep_head_and_tail_only() {
    assert_eq!(mask_token("sk-relay-0123456789"), "sk-rela***6789");
    // 12 characters is the shortest token that keeps any visible part.
    assert_eq!(mask_token("abcdefghijkl"), "abcdefg***ijkl");
}

#[test]
fn masked_output_has_fixed_length() {
    let masked = mask_token("sk-0123456789-abcdefghijklmnopqrstuvwxyz");
    assert_eq!(masked, "sk-0123***wxyz");
    assert_eq!(masked.chars().count(), 7 + 3 + 4);
}

#[test]
fn multibyte_tokens_do_not_split_characters() {
    let masked = mask_token("ключ-äöü-0123456789");
    assert_eq!(masked, "ключ-äö***6789");
}
