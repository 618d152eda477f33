//! Typed field, slot and attribute access on compiled base classes

use chrono::{TimeZone, Utc};
use rstest::rstest;

use nxbind::domain::classes::{
    NXcrystal, NXdata, NXdetector, NXentry, NXinstrument, NXnote, NXroot, NXsample,
};
use nxbind::domain::{
    Attribute, BaseClass, DataNode, Dataset, DomainError, GroupNode, NexusObject, NexusType,
    NexusUnit, Node, Oid, ValueKind,
};

fn entry() -> NXentry {
    NXentry::with_oid(Oid::new(100))
}

#[test]
fn given_text_and_time_fields_when_set_then_read_back_typed() {
    // Arrange
    let mut entry = entry();
    let start = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();

    // Act
    entry
        .set_field_value(NXentry::TITLE, "powder scan".to_string())
        .unwrap();
    entry.set_field_value(NXentry::START_TIME, start).unwrap();
    entry.set_field_value(NXentry::DURATION, 3600).unwrap();

    // Assert
    assert_eq!(
        entry.field_value(NXentry::TITLE).as_deref(),
        Some("powder scan")
    );
    assert_eq!(entry.field_value(NXentry::START_TIME), Some(start));
    assert_eq!(entry.field_value(NXentry::DURATION), Some(3600));
    assert!(entry.field_dataset(NXentry::DURATION).unwrap().is_scalar());
}

#[test]
fn given_unset_field_when_reading_then_none() {
    let entry = entry();
    assert_eq!(entry.field_value(NXentry::TITLE), None);
    assert!(entry.field_dataset(NXentry::TITLE).is_none());
    assert!(entry.field_attribute(NXentry::TITLE, "units").is_none());
}

#[test]
fn given_array_dataset_when_reading_scalar_view_then_first_element() {
    // Arrange
    let mut detector = NXdetector::with_oid(Oid::new(1));
    let counts = Dataset::with_shape(vec![4_i64, 8, 15, 16, 23, 42], vec![2, 3]).unwrap();

    // Act
    detector.set_field_dataset(NXdetector::DATA, counts).unwrap();

    // Assert
    let stored = detector.field_dataset(NXdetector::DATA).unwrap();
    assert_eq!(stored.shape(), &[2, 3]);
    assert_eq!(stored.kind(), ValueKind::Int, "NX_NUMBER keeps integer storage");
    assert_eq!(stored.as_slice::<i64>(), Some(&[4, 8, 15, 16, 23, 42][..]));
    assert_eq!(detector.field_value(NXdetector::DATA), Some(4.0));
}

#[rstest]
#[case(Dataset::scalar("fast".to_string()), ValueKind::Str)]
#[case(Dataset::scalar(true), ValueKind::Bool)]
#[case(Dataset::from_vec(vec!["a".to_string(), "b".to_string()]), ValueKind::Str)]
fn given_wrong_kind_when_setting_float_field_then_type_mismatch(
    #[case] dataset: Dataset,
    #[case] found: ValueKind,
) {
    let mut sample = NXsample::with_oid(Oid::new(1));

    let err = sample
        .set_field_dataset(NXsample::TEMPERATURE, dataset)
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::TypeMismatch {
            field: "temperature".into(),
            expected: NexusType::Float,
            found,
        }
    );
    assert!(sample.field_dataset(NXsample::TEMPERATURE).is_none());
}

#[test]
fn given_integer_dataset_when_setting_float_field_then_accepted_and_coerced() {
    let mut sample = NXsample::with_oid(Oid::new(1));

    sample
        .set_field_dataset(NXsample::TEMPERATURE, Dataset::scalar(300_i64))
        .unwrap();

    assert_eq!(sample.field_value(NXsample::TEMPERATURE), Some(300.0));
}

#[test]
fn given_field_when_set_again_then_replaces_value_and_keeps_attributes() {
    // Arrange
    let mut sample = NXsample::with_oid(Oid::new(1));
    sample.set_field_value(NXsample::TEMPERATURE, 290.0).unwrap();
    sample
        .set_field_attribute(NXsample::TEMPERATURE, Attribute::text("units", "K"))
        .unwrap();

    // Act
    sample.set_field_value(NXsample::TEMPERATURE, 300.5).unwrap();

    // Assert
    assert_eq!(sample.field_value(NXsample::TEMPERATURE), Some(300.5));
    let units = sample
        .field_attribute(NXsample::TEMPERATURE, "units")
        .unwrap();
    assert_eq!(units.as_str(), Some("K"));
    assert_eq!(sample.data_node("temperature").unwrap().units(), Some("K"));
}

#[test]
fn given_field_attribute_when_replaced_then_returns_previous() {
    let mut crystal = NXcrystal::with_oid(Oid::new(1));
    crystal.set_field_value(NXcrystal::CUT_ANGLE, 1.5).unwrap();

    let first = crystal
        .set_field_attribute(NXcrystal::CUT_ANGLE, Attribute::text("units", "deg"))
        .unwrap();
    let second = crystal
        .set_field_attribute(NXcrystal::CUT_ANGLE, Attribute::text("units", "rad"))
        .unwrap();

    assert!(first.is_none());
    assert_eq!(second.unwrap().as_str(), Some("deg"));
}

#[test]
fn given_class_attribute_when_set_then_reads_back() {
    let mut data = NXdata::with_oid(Oid::new(1));

    let previous = data.set_class_attribute(NXdata::SIGNAL, "counts".to_string());
    data.set_class_attribute(NXdata::AXES, "x".to_string());

    assert!(previous.is_none());
    assert_eq!(data.class_attribute(NXdata::SIGNAL).as_deref(), Some("counts"));
    assert_eq!(data.class_attribute(NXdata::AXES).as_deref(), Some("x"));
    assert_eq!(data.nx_class(), Some("NXdata"));
}

#[test]
fn given_slot_when_set_then_typed_child_is_reachable() {
    // Arrange
    let mut entry = entry();
    let mut sample = NXsample::with_oid(Oid::new(2));
    sample
        .set_field_value(NXsample::NAME, "LaB6".to_string())
        .unwrap();

    // Act
    let replaced = entry.set_slot(NXentry::SAMPLE, sample).unwrap();

    // Assert
    assert!(replaced.is_none());
    let sample = entry.slot(NXentry::SAMPLE).unwrap();
    assert_eq!(sample.oid(), Oid::new(2));
    assert_eq!(sample.field_value(NXsample::NAME).as_deref(), Some("LaB6"));
}

#[test]
fn given_slot_when_mutated_through_slot_mut_then_change_is_visible() {
    let mut root = NXroot::with_oid(Oid::new(1));
    root.set_slot(NXroot::ENTRY, entry()).unwrap();

    root.slot_mut(NXroot::ENTRY)
        .unwrap()
        .set_field_value(NXentry::TITLE, "edited".to_string())
        .unwrap();

    let title = root.slot(NXroot::ENTRY).unwrap().field_value(NXentry::TITLE);
    assert_eq!(title.as_deref(), Some("edited"));
}

#[test]
fn given_slot_when_set_twice_then_returns_replaced_node() {
    let mut entry = entry();
    entry
        .set_slot(NXentry::SAMPLE, NXsample::with_oid(Oid::new(2)))
        .unwrap();

    let replaced = entry
        .set_slot(NXentry::SAMPLE, NXsample::with_oid(Oid::new(3)))
        .unwrap();

    match replaced {
        Some(Node::Group(old)) => assert_eq!(old.oid(), Oid::new(2)),
        other => panic!("expected the replaced group, got {other:?}"),
    }
    assert_eq!(entry.slot(NXentry::SAMPLE).unwrap().oid(), Oid::new(3));
}

#[test]
fn given_untyped_group_under_slot_name_when_reading_slot_then_none() {
    let mut entry = entry();
    entry
        .add_group_node("sample", Box::new(GroupNode::with_class(Oid::new(9), "NXsample")))
        .unwrap();

    assert!(entry.slot(NXentry::SAMPLE).is_none());
    assert!(entry.group_node("sample").is_some());
}

#[test]
fn given_data_node_under_slot_name_when_reading_slot_then_none() {
    let mut entry = entry();
    entry
        .add_data_node("sample", DataNode::with_oid(Oid::new(9)))
        .unwrap();

    assert!(entry.slot(NXentry::SAMPLE).is_none());
}

#[test]
fn given_named_instances_when_listing_slot_then_all_of_that_class() {
    // Arrange
    let mut instrument = NXinstrument::with_oid(Oid::new(1));
    instrument
        .set_named_slot(
            NXinstrument::DETECTOR,
            "bank1",
            NXdetector::with_oid(Oid::new(2)),
        )
        .unwrap();
    instrument
        .set_named_slot(
            NXinstrument::DETECTOR,
            "bank2",
            NXdetector::with_oid(Oid::new(3)),
        )
        .unwrap();
    instrument
        .set_slot(NXinstrument::CRYSTAL, NXcrystal::with_oid(Oid::new(4)))
        .unwrap();

    // Act
    let detectors = instrument.slot_all(NXinstrument::DETECTOR);

    // Assert
    assert_eq!(detectors.keys().copied().collect::<Vec<_>>(), ["bank1", "bank2"]);
    assert_eq!(detectors["bank2"].oid(), Oid::new(3));
    assert!(instrument.slot(NXinstrument::DETECTOR).is_none());
    assert_eq!(
        instrument
            .named_slot(NXinstrument::DETECTOR, "bank1")
            .map(|d| d.oid()),
        Some(Oid::new(2))
    );
    assert!(instrument.named_slot(NXinstrument::DETECTOR, "crystal").is_none());
}

#[test]
fn given_children_when_setting_slot_all_then_each_stored_by_name() {
    let mut entry = entry();
    let notes = (1..=3).map(|i| (format!("note_{i}"), NXnote::with_oid(Oid::new(10 + i))));

    entry.set_slot_all(NXentry::NOTES, notes).unwrap();

    let all = entry.slot_all(NXentry::NOTES);
    assert_eq!(all.len(), 3);
    assert_eq!(all["note_3"].oid(), Oid::new(13));
    entry
        .named_slot_mut(NXentry::NOTES, "note_1")
        .unwrap()
        .set_field_value(NXnote::DESCRIPTION, "first".to_string())
        .unwrap();
    assert_eq!(
        entry
            .named_slot(NXentry::NOTES, "note_1")
            .unwrap()
            .field_value(NXnote::DESCRIPTION)
            .as_deref(),
        Some("first")
    );
}

#[rstest]
#[case("")]
#[case("a/b")]
#[case("a:NXdata")]
#[case("..")]
fn given_invalid_instance_name_when_setting_named_slot_then_rejected(#[case] name: &str) {
    let mut entry = entry();

    let err = entry
        .set_named_slot(NXentry::NOTES, name, NXnote::with_oid(Oid::new(2)))
        .unwrap_err();

    assert!(matches!(err, DomainError::InvalidName { .. }), "{err:?}");
}

#[test]
#[allow(deprecated)]
fn given_deprecated_field_when_used_then_still_works() {
    let mut entry = entry();

    entry
        .set_field_value(NXentry::DEFINITION_LOCAL, "NXmx".to_string())
        .unwrap();

    assert_eq!(
        entry.field_value(NXentry::DEFINITION_LOCAL).as_deref(),
        Some("NXmx")
    );
    let def = NXentry::definition();
    assert!(def.field("definition_local").unwrap().deprecated.is_some());
}

#[test]
fn given_keys_when_inspected_then_carry_declared_names_and_types() {
    assert_eq!(NXentry::START_TIME.name(), "start_time");
    assert_eq!(NXentry::START_TIME.nx_type(), NexusType::DateTime);
    assert_eq!(NXdetector::DATA.nx_type(), NexusType::Number);
    assert_eq!(NXentry::SAMPLE.name(), "sample");
    assert_eq!(NXdata::SIGNAL.name(), "signal");

    let def = NXsample::definition();
    assert_eq!(
        def.field("temperature").unwrap().units,
        Some(NexusUnit::Temperature)
    );
    assert_eq!(def.group("beam").map(|g| g.class.as_str()), Some("NXbeam"));
}

#[test]
fn given_typed_instance_when_boxed_then_downcasts_back() {
    let mut boxed: Box<dyn NexusObject> = Box::new(NXsample::with_oid(Oid::new(5)));

    boxed
        .downcast_mut::<NXsample>()
        .unwrap()
        .set_field_value(NXsample::MASS, 1.25)
        .unwrap();

    let sample = boxed.downcast_ref::<NXsample>().unwrap();
    assert_eq!(sample.field_value(NXsample::MASS), Some(1.25));
    assert!(boxed.downcast_ref::<NXentry>().is_none());
}
