//! Sample rule sets shipped with [`RuleRegistry::builtin`](super::RuleRegistry::builtin).

use crate::predicates::Check;
use crate::rule_set;
use crate::rules::RuleSet;

pub(super) fn lead() -> RuleSet {
    rule_set! {
        "first_name" => [required, Check::FirstName],
        "last_name" => [required, Check::LastName],
        "phone" => [Check::Phone],
        "country2" => [Check::Country2],
        "email" => [required, Check::Email],
    }
}

pub(super) fn time() -> RuleSet {
    rule_set! { "time" => [required, Check::Time] }
}

pub(super) fn date() -> RuleSet {
    rule_set! { "date" => [required, Check::DateTime] }
}

pub(super) fn login() -> RuleSet {
    rule_set! {
        "login" => [required, Check::Login],
        "password" => [required, Check::Password],
    }
}
