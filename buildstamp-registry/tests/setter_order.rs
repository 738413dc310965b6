use buildstamp_registry::{BuildRecord, Field, SystemBuildInfo};
use proptest::prelude::*;

fn set(registry: &SystemBuildInfo, field: Field, record: &BuildRecord) {
    let result = match field {
        Field::Timestamp => registry.set_timestamp(record.timestamp),
        Field::Hostname => registry.set_hostname(record.hostname.as_str()),
        Field::User => registry.set_user(record.user.as_str()),
        Field::Revision => registry.set_revision(record.revision.as_str()),
        Field::Status => registry.set_status(record.status.as_str()),
    };
    result.expect("registry is still staging");
}

fn arb_record() -> impl Strategy<Value = BuildRecord> {
    (any::<i32>(), ".*", ".*", "[0-9a-f]{0,40}", "clean|modified|")
        .prop_map(|(timestamp, hostname, user, revision, status)| BuildRecord {
            timestamp,
            hostname,
            user,
            revision,
            status,
        })
}

proptest! {
    #[test]
    fn setter_order_does_not_matter(
        record in arb_record(),
        order in Just(Field::ALL.to_vec()).prop_shuffle(),
    ) {
        let registry = SystemBuildInfo::new();
        for field in &order {
            set(&registry, *field, &record);
        }
        prop_assert_eq!(registry.get_info(), &record);
    }

    #[test]
    fn partial_population_keeps_other_defaults(
        record in arb_record(),
        field in prop::sample::select(Field::ALL.to_vec()),
    ) {
        let registry = SystemBuildInfo::new();
        set(&registry, field, &record);

        let info = registry.get_info();
        let defaults = BuildRecord::default();
        for other in Field::ALL {
            let expected = if other == field { record.value_of(other) } else { defaults.value_of(other) };
            prop_assert_eq!(info.value_of(other), expected);
        }
    }
}
