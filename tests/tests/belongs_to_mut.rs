use tests::*;

use pretty_assertions::assert_eq;
use tether::{record, Instance, Model, Result, Value};
use tether_driver_memory::OpKind;

#[tokio::test]
async fn build() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "build" }]);

    let mut child = fx.child(1).await;
    let parent = fx.accessor(&mut child).build(record! { "name" => "build" })?;

    assert!(parent.id().is_null());
    assert_eq!(parent.get("name"), &Value::from("build"));
    assert!(child.record().get("parent_id").is_null());

    assert!(fx.parent.rows().is_empty());
    assert_eq!(fx.child.rows(), vec![record! { "id" => 1, "name" => "build" }]);
    Ok(())
}

#[tokio::test]
async fn set() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "set" }]);

    let mut child = fx.child(1).await;
    let parent = fx.parent.create(record! { "name" => "set" }).await?;

    fx.accessor(&mut child).set(&parent).await?;
    assert_eq!(child.record().get("parent_id"), parent.id());

    assert_eq!(fx.parent.rows(), vec![record! { "id" => 1, "name" => "set" }]);
    assert_eq!(
        fx.child.rows(),
        vec![record! { "id" => 1, "name" => "set", "parent_id" => 1 }]
    );
    Ok(())
}

#[tokio::test]
async fn set_replaces_existing_parent() -> Result<()> {
    let fx = Fixture::mutable();
    fx.parent.reset([record! { "name" => "old" }, record! { "name" => "new" }]);
    fx.child.reset([record! { "name" => "c", "parent_id" => 1 }]);

    let mut child = fx.child(1).await;
    let new_parent = fx.parent.find_by_id(&Value::I64(2)).await?;

    fx.accessor(&mut child).set(&new_parent).await?;
    assert_eq!(fx.accessor(&mut child).get().await?, new_parent);

    // The previous parent is untouched.
    assert_eq!(fx.parent.rows().len(), 2);
    Ok(())
}

#[tokio::test]
async fn get_or_create() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "getOrCreate" }]);

    let mut child = fx.child(1).await;

    for i in 0..2 {
        let parent = fx
            .accessor(&mut child)
            .get_or_create(record! { "name" => format!("getOrCreate {i}") })
            .await?;

        assert_eq!(parent, record! { "id" => 1, "name" => "getOrCreate 0" });
        assert_eq!(child.record().get("parent_id"), parent.id());

        assert_eq!(
            fx.parent.rows(),
            vec![record! { "id" => 1, "name" => "getOrCreate 0" }]
        );
        assert_eq!(
            fx.child.rows(),
            vec![record! { "id" => 1, "name" => "getOrCreate", "parent_id" => 1 }]
        );
    }
    Ok(())
}

#[tokio::test]
async fn create() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "create" }]);

    let mut child = fx.child(1).await;
    let parent = fx
        .accessor(&mut child)
        .create(record! { "name" => "create" })
        .await?;

    assert_eq!(parent, record! { "id" => 1, "name" => "create" });
    assert_eq!(child.record().get("parent_id"), parent.id());
    assert_eq!(fx.accessor(&mut child).get().await?, parent);

    assert_eq!(fx.parent.rows(), vec![record! { "id" => 1, "name" => "create" }]);
    assert_eq!(
        fx.child.rows(),
        vec![record! { "id" => 1, "name" => "create", "parent_id" => 1 }]
    );
    Ok(())
}

#[tokio::test]
async fn create_writes_parent_then_child() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "create" }]);

    let mut child = fx.child(1).await;
    let mut log = fx.db.log();
    log.clear();

    fx.accessor(&mut child)
        .create(record! { "name" => "create" })
        .await?;

    assert_eq!(log.kinds(), [OpKind::Create, OpKind::Save]);
    Ok(())
}

#[tokio::test]
async fn create_or_update() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "createOrUpdate" }]);

    let mut child = fx.child(1).await;

    for i in 0..2 {
        let name = format!("createOrUpdate {i}");
        let parent = fx
            .accessor(&mut child)
            .create_or_update(record! { "name" => name.clone() })
            .await?;

        assert_eq!(parent, record! { "id" => 1, "name" => name.clone() });
        assert_eq!(child.record().get("parent_id"), parent.id());

        assert_eq!(fx.parent.rows(), vec![record! { "id" => 1, "name" => name }]);
        assert_eq!(
            fx.child.rows(),
            vec![record! { "id" => 1, "name" => "createOrUpdate", "parent_id" => 1 }]
        );
    }
    Ok(())
}

#[tokio::test]
async fn update() -> Result<()> {
    let fx = Fixture::mutable();
    fx.parent.reset([record! { "name" => "update" }]);
    fx.child.reset([record! { "name" => "update", "parent_id" => 1 }]);

    let mut child = fx.child(1).await;
    let mut log = fx.db.log();
    log.clear();

    let parent = fx
        .accessor(&mut child)
        .update(record! { "name" => "updated" })
        .await?;

    assert_eq!(parent, record! { "id" => 1, "name" => "updated" });
    assert_eq!(child.record().get("parent_id"), parent.id());

    // The child is neither re-read nor saved.
    assert_eq!(log.kinds(), [OpKind::UpdateById]);

    assert_eq!(fx.parent.rows(), vec![record! { "id" => 1, "name" => "updated" }]);
    assert_eq!(
        fx.child.rows(),
        vec![record! { "id" => 1, "name" => "update", "parent_id" => 1 }]
    );
    Ok(())
}

#[tokio::test]
async fn update_owner_scenario() -> Result<()> {
    let fx = Fixture::new(|options| options.foreign_key("owner_id"));
    fx.parent
        .instance(record! { "id" => 5, "name" => "X" })
        .save()
        .await?;
    fx.child
        .instance(record! { "id" => 1, "owner_id" => 5 })
        .save()
        .await?;

    let mut child = fx.child(1).await;
    let parent = fx
        .accessor(&mut child)
        .update(record! { "name" => "Y" })
        .await?;

    assert_eq!(parent, record! { "id" => 5, "name" => "Y" });
    assert_eq!(child.record(), &record! { "id" => 1, "owner_id" => 5 });
    assert_eq!(fx.child.rows(), vec![record! { "id" => 1, "owner_id" => 5 }]);
    Ok(())
}

#[tokio::test]
async fn create_after_seeding_explicit_id() -> Result<()> {
    let fx = Fixture::mutable();
    fx.parent
        .instance(record! { "id" => 5, "name" => "seeded" })
        .save()
        .await?;
    fx.child.reset([record! { "name" => "c" }]);

    let mut child = fx.child(1).await;
    let parent = fx
        .accessor(&mut child)
        .create(record! { "name" => "created" })
        .await?;

    assert_eq!(parent, record! { "id" => 6, "name" => "created" });
    assert_eq!(fx.accessor(&mut child).get().await?, parent);
    Ok(())
}

#[tokio::test]
async fn update_without_foreign_key_is_not_found() {
    let fx = Fixture::mutable();
    fx.parent.reset([record! { "name" => "p" }]);
    fx.child.reset([record! { "name" => "c" }]);

    let mut child = fx.child(1).await;
    let err = assert_err!(
        fx.accessor(&mut child)
            .update(record! { "name" => "x" })
            .await
    );

    assert!(err.is_record_not_found());
    assert_eq!(fx.parent.rows(), vec![record! { "id" => 1, "name" => "p" }]);
}

#[tokio::test]
async fn remove() -> Result<()> {
    let fx = Fixture::mutable();
    fx.parent.reset([record! { "name" => "remove" }]);
    fx.child.reset([record! { "name" => "remove", "parent_id" => 1 }]);

    let mut child = fx.child(1).await;
    let parent = fx.accessor(&mut child).remove().await?;

    assert!(parent.id().is_null());
    assert_eq!(parent, record! { "name" => "remove" });
    assert!(child.record().get("parent_id").is_null());

    assert!(fx.parent.rows().is_empty());
    assert_eq!(
        fx.child.rows(),
        vec![record! { "id" => 1, "name" => "remove", "parent_id" => Value::Null }]
    );

    let err = assert_err!(fx.accessor(&mut child).get().await);
    assert!(err.is_record_not_found());
    Ok(())
}

#[tokio::test]
async fn remove_saves_child_before_removing_parent() -> Result<()> {
    let fx = Fixture::mutable();
    fx.parent.reset([record! { "name" => "remove" }]);
    fx.child.reset([record! { "name" => "remove", "parent_id" => 1 }]);

    let mut child = fx.child(1).await;
    let mut log = fx.db.log();
    log.clear();

    fx.accessor(&mut child).remove().await?;

    assert_eq!(log.kinds(), [OpKind::Save, OpKind::RemoveById]);
    Ok(())
}

#[tokio::test]
async fn remove_without_foreign_key() {
    let fx = Fixture::mutable();
    assert_ok!(fx.child.instance(record! { "id" => 1 }).save().await);

    let mut child = fx.child(1).await;
    let mut log = fx.db.log();
    log.clear();

    // The child is detached and saved; removing a parent by an absent
    // identity then fails with the target's not-found error.
    let err = assert_err!(fx.accessor(&mut child).remove().await);
    assert!(err.is_record_not_found());

    assert!(child.record().contains("parent_id"));
    assert!(child.record().get("parent_id").is_null());
    assert_eq!(
        fx.child.rows(),
        vec![record! { "id" => 1, "parent_id" => Value::Null }]
    );
    assert_eq!(log.kinds(), [OpKind::Save, OpKind::RemoveById]);
}

#[tokio::test]
async fn foreign_key_transitions() -> Result<()> {
    let fx = Fixture::mutable();
    fx.child.reset([record! { "name" => "c" }]);

    let mut child = fx.child(1).await;
    assert!(fx.accessor(&mut child).id().is_null());

    // absent -> present
    let first = fx.accessor(&mut child).create(record! { "n" => 1 }).await?;
    assert_eq!(fx.accessor(&mut child).id(), first.id());

    // present -> present (new parent)
    let second = fx.parent.create(record! { "n" => 2 }).await?;
    fx.accessor(&mut child).set(&second).await?;
    assert_eq!(fx.accessor(&mut child).id(), second.id());

    // present -> present (same parent)
    fx.accessor(&mut child).update(record! { "n" => 3 }).await?;
    assert_eq!(fx.accessor(&mut child).id(), second.id());

    // present -> absent
    fx.accessor(&mut child).remove().await?;
    assert!(fx.accessor(&mut child).id().is_null());

    assert_eq!(fx.parent.rows(), vec![record! { "id" => 1, "n" => 1 }]);
    Ok(())
}
