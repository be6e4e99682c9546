//! Proptest generators for property-based testing.

use proptest::prelude::*;

use grantbook_core::{PermissionLevel, PermissionType, RegistrantKind};
use grantbook_ledger::{Ledger, PermissionEntry};

/// Generate any level.
pub fn level() -> impl Strategy<Value = PermissionLevel> {
    prop::sample::select(PermissionLevel::ALL.to_vec())
}

/// Generate a level offered for new grants.
pub fn grant_level() -> impl Strategy<Value = PermissionLevel> {
    prop::sample::select(PermissionLevel::NEW_GRANT.to_vec())
}

/// Generate a registrant kind.
pub fn registrant_kind() -> impl Strategy<Value = RegistrantKind> {
    prop_oneof![
        Just(RegistrantKind::Repository),
        Just(RegistrantKind::User),
        Just(RegistrantKind::Team),
    ]
}

/// Generate a permission type.
pub fn permission_type() -> impl Strategy<Value = PermissionType> {
    prop_oneof![
        Just(PermissionType::Explicit),
        Just(PermissionType::Pattern),
        Just(PermissionType::Owner),
    ]
}

/// Generate a literal registrant identifier.
pub fn literal_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,11}(/[a-z0-9_-]{1,8})?".prop_map(String::from)
}

/// Generate a registrant pattern.
pub fn pattern_name() -> impl Strategy<Value = String> {
    (literal_name(), prop::sample::select(vec![".*", "[0-9]+", "(a|b)", "?"]))
        .prop_map(|(prefix, meta)| format!("{prefix}{meta}"))
}

/// Generate an entry whose type agrees with its registrant string.
pub fn entry(kind: RegistrantKind) -> impl Strategy<Value = PermissionEntry> {
    (permission_type(), level()).prop_flat_map(move |(permission_type, level)| {
        let name = match permission_type {
            PermissionType::Pattern => pattern_name().boxed(),
            PermissionType::Explicit | PermissionType::Owner => literal_name().boxed(),
        };
        name.prop_map(move |name| PermissionEntry::new(name, kind, level, permission_type))
    })
}

/// Parameters for generating a ledger.
#[derive(Debug, Clone)]
pub struct LedgerParams {
    pub kind: RegistrantKind,
    pub entries: Vec<PermissionEntry>,
}

impl LedgerParams {
    /// Build the ledger.
    pub fn build(&self) -> Ledger {
        Ledger::from_entries(self.entries.iter().cloned())
    }
}

impl Arbitrary for LedgerParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        registrant_kind()
            .prop_flat_map(|kind| {
                prop::collection::vec(entry(kind), 0..24)
                    .prop_map(move |entries| LedgerParams { kind, entries })
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grantbook_core::NamingRules;

    proptest! {
        #[test]
        fn test_literal_names_classify_explicit(name in literal_name(), kind in registrant_kind()) {
            prop_assert_eq!(NamingRules::default().classify(&name, kind), PermissionType::Explicit);
        }

        #[test]
        fn test_pattern_names_classify_pattern(name in pattern_name(), kind in registrant_kind()) {
            prop_assert_eq!(NamingRules::default().classify(&name, kind), PermissionType::Pattern);
        }

        #[test]
        fn test_generated_entries_editable_iff_explicit(generated in registrant_kind().prop_flat_map(entry)) {
            prop_assert_eq!(generated.is_editable(), generated.is_explicit());
        }

        #[test]
        fn test_generated_entries_agree_with_naming(
            (kind, generated) in registrant_kind().prop_flat_map(|kind| (Just(kind), entry(kind))),
        ) {
            let rules = NamingRules::default();
            prop_assert_eq!(rules.is_literal(&generated.registrant, kind), !generated.is_pattern());
        }

        #[test]
        fn test_ledger_params_keep_order(params: LedgerParams) {
            let ledger = params.build();
            let registrants: Vec<_> = ledger.entries().map(|e| e.registrant.clone()).collect();
            let expected: Vec<_> = params.entries.iter().map(|e| e.registrant.clone()).collect();
            prop_assert_eq!(registrants, expected);
        }
    }
}
