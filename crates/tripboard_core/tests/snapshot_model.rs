use tripboard_core::{
    BoardService, BoardSnapshot, CardAddress, ContainerId, DayId, InMemoryBoardRepository,
};

#[test]
fn snapshot_serializes_with_expected_wire_fields() {
    let mut service = BoardService::new(InMemoryBoardRepository::new());
    service.add_person("Ada Lovelace", ["engines"]).unwrap();
    let card_id = service
        .add_card("Hike", Some("10-12"), ContainerId::Day(DayId::Saturday))
        .unwrap();
    service
        .add_note(&CardAddress::in_day(DayId::Saturday, card_id), "Boots")
        .unwrap();

    let json = serde_json::to_value(&*service.snapshot()).unwrap();
    assert_eq!(json["revision"], 3);
    assert_eq!(json["participants"][0]["initials"], "AL");
    assert_eq!(json["participants"][0]["interests"][0], "engines");
    assert_eq!(json["floating"].as_array().unwrap().len(), 0);
    assert_eq!(json["days"][0]["id"], "friday");
    assert_eq!(json["days"][1]["title"], "Saturday");

    let card = &json["days"][1]["cards"][0];
    assert_eq!(card["id"], card_id.to_string());
    assert_eq!(card["time"], "10-12");
    assert_eq!(card["day_id"], "saturday");
    assert_eq!(card["notes"][0]["text"], "Boots");
    assert!(card["notes"][0]["created_at"].as_i64().unwrap() > 0);

    let decoded: BoardSnapshot = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, *service.snapshot());
}

#[test]
fn floating_card_serializes_null_day_id() {
    let mut service = BoardService::new(InMemoryBoardRepository::new());
    service
        .add_card("Packing list", None, ContainerId::Floating)
        .unwrap();

    let json = serde_json::to_value(&*service.snapshot()).unwrap();
    assert!(json["floating"][0]["day_id"].is_null());
    assert!(json["floating"][0]["time"].is_null());
}

#[test]
fn seeded_repository_continues_from_snapshot_revision() {
    let mut seed = BoardSnapshot::new();
    seed.revision = 41;
    let repo = InMemoryBoardRepository::try_with_snapshot(seed).unwrap();
    let mut service = BoardService::new(repo);

    service
        .add_card("Packing list", None, ContainerId::Floating)
        .unwrap();
    assert_eq!(service.snapshot().revision, 42);
}
