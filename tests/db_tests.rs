mod common;

#[cfg(test)]
pub mod db_tests {
    use sqlx::PgPool;
    use uuid::Uuid;

    use super::common::*;

    use packsite::common::*;
    use packsite::db::*;
    use packsite::models::*;

    #[sqlx::test(migrations = "./migrations")]
    async fn test_from_pool(pool: PgPool) {
        let db = Database::from_pool(pool.clone());

        let row: (i32,) = sqlx::query_as("SELECT 1")
            .fetch_one(&db.pool)
            .await
            .expect("Failed to query database");

        assert_eq!(row.0, 1);

        pool.close().await;

        let result = sqlx::query_as::<_, (i32,)>("SELECT 1")
            .fetch_one(&db.pool)
            .await;
        assert!(result.is_err());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_applies_defaults(pool: PgPool) {
        let created = create::<Client>(&pool, &client("Northwind Freight"))
            .await
            .expect("Failed to create client");

        assert_eq!(created.name, "Northwind Freight");
        assert_eq!(created.display_order, 0);
        assert!(created.is_active);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_filters_inactive_and_orders(pool: PgPool) {
        create::<Slider>(&pool, &slider("Third", 3, true)).await.unwrap();
        create::<Slider>(&pool, &slider("Hidden", 0, false)).await.unwrap();
        create::<Slider>(&pool, &slider("First", 1, true)).await.unwrap();
        create::<Slider>(&pool, &slider("Second", 2, true)).await.unwrap();

        let public: Vec<String> = find_all::<Slider>(&pool, true)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(public, ["First", "Second", "Third"]);

        let admin: Vec<String> = find_all::<Slider>(&pool, false)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.title)
            .collect();
        assert_eq!(admin, ["Hidden", "First", "Second", "Third"]);

        assert_eq!(count::<Slider>(&pool).await.unwrap(), 4);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_by_id_hides_inactive_from_public(pool: PgPool) {
        let hidden = create::<Slider>(&pool, &slider("Draft", 0, false)).await.unwrap();

        assert!(find_by_id::<Slider>(&pool, hidden.id, true).await.unwrap().is_none());
        assert_eq!(
            find_by_id::<Slider>(&pool, hidden.id, false).await.unwrap(),
            Some(hidden)
        );
        assert!(find_by_id::<Slider>(&pool, Uuid::new_v4(), false).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_partial_update(pool: PgPool) {
        let member = create::<TeamMember>(&pool, &team_member("Ana Ortiz", "Plant manager"))
            .await
            .unwrap();

        let patch = TeamMemberUpdate {
            position: Some("Operations director".to_string()),
            display_order: Some(5),
            ..Default::default()
        };
        let updated = update::<TeamMember>(&pool, member.id, &patch).await.unwrap();

        assert_eq!(updated.id, member.id);
        assert_eq!(updated.name, "Ana Ortiz");
        assert_eq!(updated.position, "Operations director");
        assert_eq!(updated.display_order, 5);
        assert!(updated.is_active);
        assert!(updated.updated_at >= member.updated_at);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_clears_nullable_fields(pool: PgPool) {
        let slide = create::<Slider>(&pool, &slider("Crate Line", 0, true)).await.unwrap();
        assert_eq!(slide.button_link.as_deref(), Some("/contact"));

        let patch: SliderUpdate =
            serde_json::from_value(serde_json::json!({ "button_text": null, "button_link": null }))
                .unwrap();
        let updated = update::<Slider>(&pool, slide.id, &patch).await.unwrap();

        assert_eq!(updated.button_text, None);
        assert_eq!(updated.button_link, None);
        assert_eq!(updated.subtitle, slide.subtitle);
        assert_eq!(updated.title, "Crate Line");

        let patch = SliderUpdate {
            subtitle: Some(Some("Export-ready".to_string())),
            ..Default::default()
        };
        let updated = update::<Slider>(&pool, slide.id, &patch).await.unwrap();
        assert_eq!(updated.subtitle.as_deref(), Some("Export-ready"));
        assert_eq!(updated.button_link, None);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_and_delete_missing(pool: PgPool) {
        let missing = Uuid::new_v4();

        let err = update::<Client>(&pool, missing, &ClientUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ResourceError::NotFound("Client")));

        let err = delete::<Client>(&pool, missing).await.unwrap_err();
        assert!(matches!(err, ResourceError::NotFound("Client")));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete(pool: PgPool) {
        let created = create::<Client>(&pool, &client("Delta Mills")).await.unwrap();

        delete::<Client>(&pool, created.id).await.unwrap();

        assert!(find_by_id::<Client>(&pool, created.id, false).await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_slug_generation_and_conflict(pool: PgPool) {
        let first = create::<Service>(&pool, &service("Export Crating")).await.unwrap();
        assert_eq!(first.slug, "export-crating");
        assert_eq!(first.features, ["ISPM-15 compliant", "On-site packing"]);

        let err = create::<Service>(&pool, &service("Export  crating!")).await.unwrap_err();
        assert!(matches!(err, ResourceError::Conflict("Service")));

        let explicit = ServiceCreate {
            slug: Some("export-crating-2".to_string()),
            ..service("Export Crating")
        };
        let second = create::<Service>(&pool, &explicit).await.unwrap();
        assert_eq!(second.slug, "export-crating-2");

        let rename = ServiceUpdate {
            slug: Some("export-crating".to_string()),
            ..Default::default()
        };
        let err = update::<Service>(&pool, second.id, &rename).await.unwrap_err();
        assert!(matches!(err, ResourceError::Conflict("Service")));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_find_by_slug_ignores_inactive(pool: PgPool) {
        create::<Industry>(&pool, &industry("Automotive", true)).await.unwrap();
        create::<Industry>(&pool, &industry("Aerospace", false)).await.unwrap();

        let found = find_by_slug::<Industry>(&pool, "automotive").await.unwrap();
        assert_eq!(found.map(|i| i.name).as_deref(), Some("Automotive"));

        assert!(find_by_slug::<Industry>(&pool, "aerospace").await.unwrap().is_none());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_products_in_category(pool: PgPool) {
        let boxes = create::<ProductCategory>(&pool, &category("Corrugated Boxes")).await.unwrap();
        let pallets = create::<ProductCategory>(&pool, &category("Pallets")).await.unwrap();
        assert_eq!(boxes.slug, "corrugated-boxes");

        create::<Product>(&pool, &product(boxes.id, "Double Wall Box", true)).await.unwrap();
        create::<Product>(&pool, &product(boxes.id, "Die Cut Box", false)).await.unwrap();
        create::<Product>(&pool, &product(pallets.id, "Euro Pallet", true)).await.unwrap();

        let active = list_products_in_category(&pool, boxes.id, true).await.unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].name, "Double Wall Box");

        let all = list_products_in_category(&pool, boxes.id, false).await.unwrap();
        assert_eq!(all.len(), 2);

        let none = list_products_in_category(&pool, Uuid::new_v4(), true).await.unwrap();
        assert!(none.is_empty());
    }
}
