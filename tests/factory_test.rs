//! Tests for NexusNodeFactory and the oid generator

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use rstest::rstest;

use nxbind::domain::classes::{NXcrystal, NXdetector, NXentry, NXreflections, NXsample};
use nxbind::domain::{
    DomainError, NexusBaseClass, NexusNodeFactory, NexusPath, Oid, OidGenerator,
};
use nxbind::util::testing;

#[test]
fn given_every_class_when_creating_then_type_and_nx_class_match() {
    testing::init_test_setup();
    // Arrange
    let oids = OidGenerator::new();
    let factory = NexusNodeFactory::with_generator(&oids);

    for &class in NexusBaseClass::ALL {
        // Act
        let first = factory.create(class).unwrap();
        let second = factory.create(class).unwrap();

        // Assert
        assert_eq!(first.nexus_class(), Some(class), "{class}");
        assert_eq!(first.class_name(), Some(class.name()));
        assert_ne!(first.oid(), second.oid(), "{class} instances share an oid");
    }
    assert_eq!(oids.peek(), 1 + 2 * NexusBaseClass::ALL.len() as u64);
}

#[test]
fn given_every_class_when_creating_with_oid_then_carries_exactly_that_oid() {
    let oids = OidGenerator::new();
    let factory = NexusNodeFactory::with_generator(&oids);

    for (i, &class) in NexusBaseClass::ALL.iter().enumerate() {
        let oid = Oid::new(1_000 + i as u64);
        let object = factory.create_with_oid(class, oid);
        assert_eq!(object.oid(), oid);
        assert_eq!(object.nexus_class(), Some(class));
    }
    assert_eq!(oids.peek(), 1, "explicit oids never draw from the counter");
}

#[test]
fn given_every_class_name_when_creating_by_name_then_resolves() {
    let factory = NexusNodeFactory::global();
    for &class in NexusBaseClass::ALL {
        let object = factory.create_by_name(class.name()).unwrap();
        assert_eq!(object.nexus_class(), Some(class));
    }
}

#[test]
fn given_class_names_when_creating_then_runtime_types_match() {
    let factory = NexusNodeFactory::global();

    assert!(factory.create_by_name("NXcrystal").unwrap().is::<NXcrystal>());
    assert!(factory.create_by_name("NXdetector").unwrap().is::<NXdetector>());
    assert!(factory.create_by_name("NXentry").unwrap().is::<NXentry>());
    assert!(factory.create_by_name("NXreflections").unwrap().is::<NXreflections>());
    assert!(!factory.create_by_name("NXsample").unwrap().is::<NXentry>());
    assert!(factory
        .create_by_name("NXsample")
        .unwrap()
        .downcast_ref::<NXsample>()
        .is_some());
}

#[rstest]
#[case("NXdoesnotexist")]
#[case("")]
#[case("nxsample")]
#[case("NXsample ")]
fn given_unknown_name_when_creating_then_fails_every_time(#[case] name: &str) {
    let oids = OidGenerator::new();
    let factory = NexusNodeFactory::with_generator(&oids);

    for _ in 0..3 {
        let err = factory.create_by_name(name).unwrap_err();
        assert_eq!(err, DomainError::UnknownBaseClass(name.to_string()));
    }
    let err = factory.create_by_name_with_oid(name, Oid::new(7)).unwrap_err();
    assert_eq!(err, DomainError::UnknownBaseClass(name.to_string()));
    assert_eq!(oids.peek(), 1);
}

#[test]
fn given_generator_when_drawing_ten_thousand_times_then_strictly_increasing_and_non_zero() {
    let oids = OidGenerator::new();
    let mut previous = 0;

    for _ in 0..10_000 {
        let oid = oids.next_oid().unwrap().value();
        assert_ne!(oid, 0);
        assert!(oid > previous, "{oid} after {previous}");
        previous = oid;
    }
}

#[test]
fn given_concurrent_draws_when_collecting_then_all_unique() {
    // Arrange
    let oids = Arc::new(OidGenerator::new());
    let threads = 8;
    let per_thread = 2_000;

    // Act
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let oids = Arc::clone(&oids);
            thread::spawn(move || {
                (0..per_thread)
                    .map(|_| oids.next_oid().unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    let all: Vec<Oid> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();

    // Assert
    let unique: HashSet<_> = all.iter().copied().collect();
    assert_eq!(unique.len(), threads * per_thread);
    assert!(!unique.contains(&Oid::new(0)));
}

#[test]
fn given_concurrent_global_factories_when_creating_then_oids_unique() {
    let handles: Vec<_> = (0..4)
        .map(|_| {
            thread::spawn(|| {
                let factory = NexusNodeFactory::default();
                (0..500)
                    .map(|_| factory.create(NexusBaseClass::NXdata).unwrap().oid())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for oid in handle.join().unwrap() {
            assert!(seen.insert(oid), "duplicate oid {oid}");
        }
    }
}

#[test]
fn given_wraparound_when_drawing_then_exhaustion_is_sticky() {
    let oids = OidGenerator::starting_at(u64::MAX - 1);

    assert_eq!(oids.next_oid().unwrap(), Oid::new(u64::MAX - 1));
    assert_eq!(oids.next_oid().unwrap(), Oid::new(u64::MAX));
    for _ in 0..3 {
        assert_eq!(oids.next_oid().unwrap_err(), DomainError::OidExhausted);
    }
    assert_eq!(oids.peek(), 0);
}

#[test]
fn given_factory_when_creating_primitives_then_each_draws_an_oid() {
    let oids = OidGenerator::new();
    let factory = NexusNodeFactory::with_generator(&oids);

    let data = factory.create_data_node().unwrap();
    let group = factory.create_group_node(Some("NXwidget")).unwrap();
    let bare = factory.create_group_node(None).unwrap();
    let target: NexusPath = "/entry/data".parse().unwrap();
    let link = factory.create_symbolic_node(target.clone(), None).unwrap();
    let file = factory.create_tree_file("scan.nxs").unwrap();

    assert_eq!(data.oid(), Oid::new(1));
    assert_eq!(group.oid(), Oid::new(2));
    assert_eq!(group.nx_class(), Some("NXwidget"));
    assert_eq!(bare.nx_class(), None);
    assert_eq!(link.oid(), Oid::new(4));
    assert_eq!(link.target(), &target);
    assert!(!link.is_external());
    assert_eq!(file.oid(), Oid::new(5));
    assert_eq!(file.root().oid(), Oid::new(6));
    assert_eq!(file.filename(), std::path::Path::new("scan.nxs"));
    assert_eq!(file.source(), Some("scan.nxs"));
}

#[test]
fn given_explicit_oids_when_creating_primitives_then_pass_through() {
    let oids = OidGenerator::new();
    let factory = NexusNodeFactory::with_generator(&oids);
    let root = factory.create_with_oid(NexusBaseClass::NXroot, Oid::new(11));

    let tree = factory.create_tree_with_oid(Oid::new(10), root, Some("a.nxs"));
    let data = factory.create_data_node_with_oid(Oid::new(12));
    let link = factory.create_symbolic_node_with_oid(
        "/x".parse().unwrap(),
        Some("other.nxs"),
        Oid::new(13),
    );

    assert_eq!(tree.oid(), Oid::new(10));
    assert_eq!(tree.root().oid(), Oid::new(11));
    assert_eq!(data.oid(), Oid::new(12));
    assert!(link.is_external());
    assert_eq!(link.uri(), Some("other.nxs"));
    assert_eq!(oids.peek(), 1);
}
