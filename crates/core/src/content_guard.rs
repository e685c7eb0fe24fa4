//! Chat content guard: keeps personal contact details and off-platform
//! payment coordination out of booking conversations.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Philippine mobile numbers: a 10-11 digit run, contiguous or grouped
/// 4-3-3 / 4-3-4 with spaces or hyphens.
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{4}[\s-]?\d{3}[\s-]?\d{3,4}").expect("invalid phone number regex")
});

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(https?://|www\.)").expect("invalid link regex"));

/// Wallet apps are blocked on the bare name; bank names only together with
/// the word "account". The asymmetry is intentional: "pay via gcash" is
/// always an attempt to settle off-platform, while bank names come up in
/// ordinary conversation.
static WALLET_APP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(gcash|maya)\b").expect("invalid wallet app regex"));

static BANK_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(bpi|bdo)\b.*\baccount\b").expect("invalid bank account regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockReason {
    PhoneNumber,
    Link,
    PaymentChannel,
}

impl fmt::Display for BlockReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockReason::PhoneNumber => {
                write!(f, "Phone numbers are hidden for your safety.")
            }
            BlockReason::Link => write!(f, "Links are not allowed in chat."),
            BlockReason::PaymentChannel => write!(
                f,
                "Please keep payments inside the app. Payment app and bank details are not allowed."
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    Blocked(BlockReason),
}

/// Pure and deterministic: same body, same verdict, no side effects.
pub fn validate(body: &str) -> Verdict {
    if PHONE_NUMBER.is_match(body) {
        return Verdict::Blocked(BlockReason::PhoneNumber);
    }
    if LINK.is_match(body) {
        return Verdict::Blocked(BlockReason::Link);
    }
    if WALLET_APP.is_match(body) || BANK_ACCOUNT.is_match(body) {
        return Verdict::Blocked(BlockReason::PaymentChannel);
    }
    Verdict::Allowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_grouped_phone_numbers() {
        assert_eq!(
            validate("Call me at 0917-123-4567"),
            Verdict::Blocked(BlockReason::PhoneNumber)
        );
        assert_eq!(
            validate("text 0917 123 4567 po"),
            Verdict::Blocked(BlockReason::PhoneNumber)
        );
    }

    #[test]
    fn blocks_contiguous_digit_runs() {
        assert_eq!(
            validate("my number is 09171234567"),
            Verdict::Blocked(BlockReason::PhoneNumber)
        );
        // 10-digit run without the leading zero
        assert_eq!(
            validate("9171234567"),
            Verdict::Blocked(BlockReason::PhoneNumber)
        );
    }

    #[test]
    fn allows_short_numbers_and_addresses() {
        assert_eq!(validate("Nasa 7/11 po ako"), Verdict::Allowed);
        assert_eq!(validate("See you at Unit 1204 around 10:30"), Verdict::Allowed);
    }

    #[test]
    fn blocks_links() {
        assert_eq!(
            validate("pics at https://example.com/drill"),
            Verdict::Blocked(BlockReason::Link)
        );
        assert_eq!(
            validate("check www.example.com"),
            Verdict::Blocked(BlockReason::Link)
        );
    }

    #[test]
    fn wallet_apps_block_on_name_alone() {
        assert_eq!(
            validate("pay me thru GCash na lang"),
            Verdict::Blocked(BlockReason::PaymentChannel)
        );
        assert_eq!(
            validate("Maya works too"),
            Verdict::Blocked(BlockReason::PaymentChannel)
        );
    }

    #[test]
    fn bank_names_need_account_context() {
        assert_eq!(validate("I work near the BPI branch"), Verdict::Allowed);
        assert_eq!(
            validate("send to my BPI account instead"),
            Verdict::Blocked(BlockReason::PaymentChannel)
        );
    }

    #[test]
    fn verdict_is_stable_across_calls() {
        let body = "Call me at 0917-123-4567";
        assert_eq!(validate(body), validate(body));
    }
}
