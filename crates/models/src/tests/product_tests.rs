use crate::product::{self, ProductDraft};
use anyhow::Result;

#[tokio::test]
async fn test_insert_assigns_sequential_ids() -> Result<()> {
    let db = super::setup_test_db().await?;

    let first = product::save(&db, ProductDraft::new("Widget", 9.99)).await?;
    let second = product::save(&db, ProductDraft::new("Gadget", 3.5)).await?;

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.name, "Widget");
    assert_eq!(first.price, 9.99);
    Ok(())
}

#[tokio::test]
async fn test_find_by_id_present_and_absent() -> Result<()> {
    let db = super::setup_test_db().await?;
    let created = product::save(&db, ProductDraft::new("Widget", 9.99)).await?;

    let found = product::find_by_id(&db, created.id).await?;
    assert_eq!(found, Some(created));

    let missing = product::find_by_id(&db, 999).await?;
    assert!(missing.is_none());
    Ok(())
}

#[tokio::test]
async fn test_find_all_in_id_order() -> Result<()> {
    let db = super::setup_test_db().await?;
    assert!(product::find_all(&db).await?.is_empty());

    for (name, price) in [("a", 1.0), ("b", 2.0), ("c", 3.0)] {
        product::save(&db, ProductDraft::new(name, price)).await?;
    }

    let all = product::find_all(&db).await?;
    let names: Vec<_> = all.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
    Ok(())
}

#[tokio::test]
async fn test_save_with_id_overwrites() -> Result<()> {
    let db = super::setup_test_db().await?;
    let created = product::save(&db, ProductDraft::new("Widget", 9.99)).await?;

    let mut draft = ProductDraft::from(created.clone());
    draft.price = 12.5;
    let updated = product::save(&db, draft).await?;

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Widget");
    assert_eq!(updated.price, 12.5);
    assert_eq!(product::find_all(&db).await?.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_save_with_unknown_id_inserts_under_that_id() -> Result<()> {
    let db = super::setup_test_db().await?;
    let draft = ProductDraft { id: Some(42), name: "Imported".into(), price: 1.25 };

    let saved = product::save(&db, draft).await?;
    assert_eq!(saved.id, 42);
    assert_eq!(product::find_by_id(&db, 42).await?.map(|p| p.name), Some("Imported".to_string()));
    Ok(())
}

#[test]
fn test_model_json_shape() {
    let m = product::Model { id: 1, name: "Widget".into(), price: 9.99 };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v, serde_json::json!({"id": 1, "name": "Widget", "price": 9.99}));
}

#[test]
fn test_draft_accepts_missing_or_null_id() {
    let a: ProductDraft = serde_json::from_str(r#"{"name":"x","price":1}"#).unwrap();
    let b: ProductDraft = serde_json::from_str(r#"{"id":null,"name":"x","price":1}"#).unwrap();
    assert_eq!(a.id, None);
    assert_eq!(a, b);
}
