use atelier_domain::ProfileKind;
use atelier_talent::{InMemoryKeyValueStore, JsonFileStore, KeyValueStore, SavedTalent, TalentCard, TalentError,
                     TalentFilter, SAVED_TALENT_KEY};
use uuid::Uuid;

fn card(kind: ProfileKind, name: &str, city: &str, tags: &[&str]) -> TalentCard {
    TalentCard { id: Uuid::new_v4(),
                 kind,
                 display_name: name.to_string(),
                 city: Some(city.to_string()),
                 tags: tags.iter().map(|t| t.to_string()).collect() }
}

#[test]
fn add_remove_and_toggle_keep_ids_unique() {
    let saved = SavedTalent::new(InMemoryKeyValueStore::new());
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();

    assert!(saved.add(a).unwrap());
    assert!(!saved.add(a).unwrap());
    assert!(saved.toggle(b).unwrap());
    assert_eq!(saved.list().unwrap().len(), 2);

    assert!(!saved.toggle(b).unwrap());
    assert!(saved.remove(a).unwrap());
    assert!(!saved.remove(a).unwrap());
    assert!(saved.list().unwrap().is_empty());
}

#[test]
fn list_is_stored_as_a_json_array_under_one_key() {
    let saved = SavedTalent::new(InMemoryKeyValueStore::new());
    let id = Uuid::new_v4();
    saved.add(id).unwrap();

    let raw = saved.store().get(SAVED_TALENT_KEY).unwrap().unwrap();
    let parsed: Vec<Uuid> = serde_json::from_str(&raw).unwrap();
    assert_eq!(parsed, vec![id]);
}

#[test]
fn corrupted_list_is_reported() {
    let store = InMemoryKeyValueStore::new();
    store.set(SAVED_TALENT_KEY, "{oops").unwrap();
    let saved = SavedTalent::new(store);
    assert!(matches!(saved.list(), Err(TalentError::Corrupted(_))));
}

#[test]
fn file_backed_list_persists_between_instances() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved_talent.json");
    let id = Uuid::new_v4();

    SavedTalent::new(JsonFileStore::new(&path)).add(id).unwrap();
    let reopened = SavedTalent::new(JsonFileStore::new(&path));
    assert!(reopened.contains(id).unwrap());
}

#[test]
fn filter_combines_criteria() {
    let cards = vec![card(ProfileKind::Model, "Ada Lovelace", "Milano", &["runway"]),
                     card(ProfileKind::Photographer, "Grace Hopper", "milano", &["editorial", "film"]),
                     card(ProfileKind::Photographer, "Edsger Dijkstra", "Amsterdam", &["street"])];
    let saved = vec![cards[1].id];

    let by_city = TalentFilter { city: Some("Milano".into()),
                                 ..Default::default() };
    assert_eq!(by_city.apply(&cards, &saved).len(), 2);

    let photographers_in_milan = TalentFilter { kind: Some(ProfileKind::Photographer),
                                                city: Some("MILANO".into()),
                                                ..Default::default() };
    let hits = photographers_in_milan.apply(&cards, &saved);
    assert_eq!(hits.iter().map(|c| c.display_name.as_str()).collect::<Vec<_>>(), vec!["Grace Hopper"]);

    let by_tag = TalentFilter { query: Some("FILM".into()),
                                ..Default::default() };
    assert_eq!(by_tag.apply(&cards, &saved).len(), 1);

    let saved_only = TalentFilter { saved_only: true,
                                    ..Default::default() };
    assert_eq!(saved_only.apply(&cards, &[]).len(), 0);
    assert_eq!(saved_only.apply(&cards, &saved)[0].id, cards[1].id);

    assert_eq!(TalentFilter::default().apply(&cards, &saved).len(), 3);
}
