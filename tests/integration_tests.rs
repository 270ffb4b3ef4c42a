use mathmerise::models::{
    CreateCategory, CreateExample, CreateFormula, CreateTopic, Difficulty,
};
use mathmerise::services::{categories, examples, formulas, search, topics};
use mathmerise::{Config, Database};

fn create_test_db() -> Database {
    use rand::Rng;
    let mut rng = rand::thread_rng();
    let id: u32 = rng.gen();
    let name = format!("test_db_{}", id);

    let db = Database::open_memory(&name).expect("Failed to create test database");
    db.migrate().expect("Failed to run migrations");
    db
}

fn sample_category(db: &Database, name: &str) -> i64 {
    categories::create_category(
        db,
        CreateCategory {
            name: name.to_string(),
            slug: None,
            description: Some(format!("All about {}", name)),
            icon: None,
        },
    )
    .expect("Failed to create category")
}

fn sample_topic(db: &Database, title: &str, category_id: i64) -> i64 {
    topics::create_topic(
        db,
        CreateTopic {
            title: title.to_string(),
            slug: None,
            description: Some(format!("{} explained step by step", title)),
            content: format!("<p>{}</p>", title),
            category_id,
            difficulty: Difficulty::Beginner,
        },
    )
    .expect("Failed to create topic")
}

mod category_integration_tests {
    use super::*;

    #[test]
    fn test_create_category_generates_slug() {
        let db = create_test_db();
        sample_category(&db, "Number Theory");

        let category = categories::get_category_by_slug(&db, "number-theory")
            .unwrap()
            .expect("Category should be found");
        assert_eq!(category.name, "Number Theory");
    }

    #[test]
    fn test_create_category_keeps_explicit_slug() {
        let db = create_test_db();
        categories::create_category(
            &db,
            CreateCategory {
                name: "Calculus".to_string(),
                slug: Some("calc".to_string()),
                description: None,
                icon: None,
            },
        )
        .unwrap();

        assert!(categories::get_category_by_slug(&db, "calc")
            .unwrap()
            .is_some());
        assert!(categories::get_category_by_slug(&db, "calculus")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_create_category_rejects_invalid_slug() {
        let db = create_test_db();
        let result = categories::create_category(
            &db,
            CreateCategory {
                name: "Algebra".to_string(),
                slug: Some("Not A Slug".to_string()),
                description: None,
                icon: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_duplicate_category_name_fails() {
        let db = create_test_db();
        sample_category(&db, "Algebra");
        let result = categories::create_category(
            &db,
            CreateCategory {
                name: "Algebra".to_string(),
                slug: Some("algebra-2".to_string()),
                description: None,
                icon: None,
            },
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_list_categories_with_counts() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        sample_category(&db, "Geometry");
        sample_topic(&db, "Linear Equations", algebra);
        sample_topic(&db, "Quadratic Equations", algebra);

        let listed = categories::list_categories_with_counts(&db).unwrap();
        assert_eq!(listed.len(), 2);
        let counts: Vec<(&str, i64)> = listed
            .iter()
            .map(|c| (c.category.name.as_str(), c.topic_count))
            .collect();
        assert!(counts.contains(&("Algebra", 2)));
        assert!(counts.contains(&("Geometry", 0)));
    }

    #[test]
    fn test_delete_category_cascades_to_topics() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        sample_topic(&db, "Linear Equations", algebra);

        categories::delete_category(&db, algebra).unwrap();

        assert_eq!(topics::count_topics(&db).unwrap(), 0);
    }

    #[test]
    fn test_update_category() {
        let db = create_test_db();
        let id = sample_category(&db, "Algebra");

        categories::update_category(
            &db,
            id,
            CreateCategory {
                name: "Linear Algebra".to_string(),
                slug: None,
                description: None,
                icon: Some("🧮".to_string()),
            },
        )
        .unwrap();

        let updated = categories::get_category_by_id(&db, id).unwrap().unwrap();
        assert_eq!(updated.name, "Linear Algebra");
        assert_eq!(updated.slug, "linear-algebra");
        assert_eq!(updated.icon.as_deref(), Some("🧮"));
    }
}

mod topic_integration_tests {
    use super::*;

    #[test]
    fn test_create_topic_generates_slug_from_title() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        sample_topic(&db, "Quadratic Equations", algebra);

        let topic = topics::get_topic_by_slug(&db, "quadratic-equations")
            .unwrap()
            .expect("Topic should be found");
        assert_eq!(topic.topic.title, "Quadratic Equations");
        assert_eq!(
            topic.category.as_ref().map(|c| c.name.as_str()),
            Some("Algebra")
        );
    }

    #[test]
    fn test_create_topic_sanitizes_html_content() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let id = topics::create_topic(
            &db,
            CreateTopic {
                title: "Injection".to_string(),
                slug: None,
                description: None,
                content: "<p>fine</p><script>alert(1)</script>".to_string(),
                category_id: algebra,
                difficulty: Difficulty::Beginner,
            },
        )
        .unwrap();

        let topic = topics::get_topic_by_id(&db, id).unwrap().unwrap();
        assert!(topic.content.contains("<p>fine</p>"));
        assert!(!topic.content.contains("<script>"));
    }

    #[test]
    fn test_record_view_increments() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let id = sample_topic(&db, "Linear Equations", algebra);

        topics::record_view(&db, id).unwrap();
        topics::record_view(&db, id).unwrap();

        let topic = topics::get_topic_by_id(&db, id).unwrap().unwrap();
        assert_eq!(topic.views, 2);
    }

    #[test]
    fn test_featured_topics_ordered_by_views() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let quiet = sample_topic(&db, "Linear Equations", algebra);
        let popular = sample_topic(&db, "Quadratic Equations", algebra);
        for _ in 0..3 {
            topics::record_view(&db, popular).unwrap();
        }
        topics::record_view(&db, quiet).unwrap();

        let featured = topics::featured_topics(&db, 10).unwrap();
        assert_eq!(featured[0].id, popular);
        assert_eq!(featured[1].id, quiet);
    }

    #[test]
    fn test_related_topics_same_category_excluding_self() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let geometry = sample_category(&db, "Geometry");
        let subject = sample_topic(&db, "Quadratic Equations", algebra);
        let sibling = sample_topic(&db, "Linear Equations", algebra);
        sample_topic(&db, "Pythagorean Theorem", geometry);

        let related = topics::related_topics(&db, algebra, subject, 4).unwrap();
        assert_eq!(related.len(), 1);
        assert_eq!(related[0].id, sibling);
    }

    #[test]
    fn test_list_topics_by_category() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let geometry = sample_category(&db, "Geometry");
        sample_topic(&db, "Linear Equations", algebra);
        sample_topic(&db, "Pythagorean Theorem", geometry);

        let listed = topics::list_topics_by_category(&db, algebra).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Linear Equations");
        assert_eq!(listed[0].category_slug, "algebra");
    }

    #[test]
    fn test_update_topic_replaces_fields() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let id = sample_topic(&db, "Linear Equations", algebra);

        topics::update_topic(
            &db,
            id,
            CreateTopic {
                title: "Systems of Linear Equations".to_string(),
                slug: None,
                description: None,
                content: "<p>updated</p>".to_string(),
                category_id: algebra,
                difficulty: Difficulty::Advanced,
            },
        )
        .unwrap();

        let updated = topics::get_topic_by_id(&db, id).unwrap().unwrap();
        assert_eq!(updated.title, "Systems of Linear Equations");
        assert_eq!(updated.slug, "systems-of-linear-equations");
        assert_eq!(updated.difficulty, Difficulty::Advanced);
    }

    #[test]
    fn test_get_missing_topic_is_none() {
        let db = create_test_db();
        assert!(topics::get_topic_by_slug(&db, "nope").unwrap().is_none());
    }
}

mod formula_example_tests {
    use super::*;

    #[test]
    fn test_add_and_list_formulas() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let topic = sample_topic(&db, "Quadratic Equations", algebra);

        formulas::add_formula(
            &db,
            topic,
            CreateFormula {
                title: "Quadratic Formula".to_string(),
                latex: r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}".to_string(),
                description: None,
            },
        )
        .unwrap();

        let listed = formulas::list_formulas(&db, topic).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Quadratic Formula");
    }

    #[test]
    fn test_delete_formula_leaves_others() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let topic = sample_topic(&db, "Quadratic Equations", algebra);

        let first = formulas::add_formula(
            &db,
            topic,
            CreateFormula {
                title: "Quadratic Formula".to_string(),
                latex: r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}".to_string(),
                description: None,
            },
        )
        .unwrap();
        formulas::add_formula(
            &db,
            topic,
            CreateFormula {
                title: "Discriminant".to_string(),
                latex: r"\Delta = b^2 - 4ac".to_string(),
                description: None,
            },
        )
        .unwrap();

        formulas::delete_formula(&db, first).unwrap();

        let listed = formulas::list_formulas(&db, topic).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].title, "Discriminant");
    }

    #[test]
    fn test_delete_example() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let topic = sample_topic(&db, "Quadratic Equations", algebra);

        let id = examples::add_example(
            &db,
            topic,
            CreateExample {
                title: "Solve x² - 5x + 6 = 0".to_string(),
                problem: "x² - 5x + 6 = 0".to_string(),
                solution: "x = 2 or x = 3".to_string(),
            },
        )
        .unwrap();

        examples::delete_example(&db, id).unwrap();
        assert!(examples::list_examples(&db, topic).unwrap().is_empty());
    }

    #[test]
    fn test_examples_cascade_with_topic() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        let topic = sample_topic(&db, "Quadratic Equations", algebra);

        examples::add_example(
            &db,
            topic,
            CreateExample {
                title: "Solve x² - 5x + 6 = 0".to_string(),
                problem: "x² - 5x + 6 = 0".to_string(),
                solution: "x = 2 or x = 3".to_string(),
            },
        )
        .unwrap();
        assert_eq!(examples::count_examples(&db).unwrap(), 1);

        topics::delete_topic(&db, topic).unwrap();
        assert_eq!(examples::count_examples(&db).unwrap(), 0);
    }
}

mod search_integration_tests {
    use super::*;

    #[test]
    fn test_search_matches_title_case_insensitively() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        sample_topic(&db, "Quadratic Equations", algebra);
        sample_topic(&db, "Linear Equations", algebra);

        let results = search::search_topics(&db, "QUADRATIC", 50).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Quadratic Equations");
    }

    #[test]
    fn test_search_matches_description() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        sample_topic(&db, "Linear Equations", algebra);

        let results = search::search_topics(&db, "step by step", 50).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_no_matches() {
        let db = create_test_db();
        let algebra = sample_category(&db, "Algebra");
        sample_topic(&db, "Linear Equations", algebra);

        let results = search::search_topics(&db, "topology", 50).unwrap();
        assert!(results.is_empty());
    }
}

mod seed_tests {
    use super::*;
    use mathmerise::cli::seed::seed;

    #[test]
    fn test_seed_loads_sample_data() {
        let db = create_test_db();
        seed(&db).unwrap();

        assert_eq!(categories::count_categories(&db).unwrap(), 6);
        assert_eq!(topics::count_topics(&db).unwrap(), 4);
        assert_eq!(formulas::count_formulas(&db).unwrap(), 2);
        assert_eq!(examples::count_examples(&db).unwrap(), 1);

        let topic = topics::get_topic_by_slug(&db, "quadratic-equations")
            .unwrap()
            .expect("Seeded topic should exist");
        assert_eq!(
            topic.category.as_ref().map(|c| c.slug.as_str()),
            Some("algebra")
        );
    }

    #[test]
    fn test_seed_is_repeatable() {
        let db = create_test_db();
        seed(&db).unwrap();
        seed(&db).unwrap();

        assert_eq!(categories::count_categories(&db).unwrap(), 6);
        assert_eq!(topics::count_topics(&db).unwrap(), 4);
    }
}

mod config_integration_tests {
    use super::*;

    #[test]
    fn test_load_config_applies_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mathmerise.toml");
        std::fs::write(
            &path,
            r#"
[site]
title = "Mathmerise"
description = "Math topics"
url = "http://localhost:3000"

[database]
path = "./data/test.db"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.content.featured_limit, 6);
        assert_eq!(config.site.language, "en");
    }

    #[test]
    fn test_load_config_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(Config::load(&path).is_err());
    }
}
