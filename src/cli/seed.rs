use crate::models::{CreateCategory, CreateExample, CreateFormula, CreateTopic, Difficulty};
use crate::services::{categories, examples, formulas, topics};
use crate::{Config, Database};
use anyhow::{anyhow, Result};
use std::path::Path;

pub async fn run(config_path: &Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let db = Database::open(&config.database.path, config.database.pool_size)?;

    db.migrate()?;
    seed(&db)?;

    tracing::info!("Database seeded with sample data");
    tracing::info!("Categories: {}", categories::count_categories(&db)?);
    tracing::info!("Topics: {}", topics::count_topics(&db)?);
    tracing::info!("Formulas: {}", formulas::count_formulas(&db)?);
    tracing::info!("Examples: {}", examples::count_examples(&db)?);

    Ok(())
}

/// Clear all content and load the sample data set.
pub fn seed(db: &Database) -> Result<()> {
    let conn = db.get()?;
    conn.execute_batch(
        "DELETE FROM examples; DELETE FROM formulas; DELETE FROM topics; DELETE FROM categories;",
    )?;
    drop(conn);

    let sample_categories = [
        (
            "Algebra",
            "Learn algebraic concepts including equations, polynomials, and functions",
            "🔢",
        ),
        (
            "Geometry",
            "Explore shapes, angles, areas, and spatial relationships",
            "🔷",
        ),
        ("Calculus", "Master derivatives, integrals, and limits", "∫"),
        (
            "Trigonometry",
            "Study angles, sine, cosine, and trigonometric identities",
            "⚡",
        ),
        (
            "Statistics",
            "Learn probability, distributions, and data analysis",
            "📊",
        ),
        (
            "Number Theory",
            "Explore primes, factors, and integer properties",
            "🔐",
        ),
    ];

    for (name, description, icon) in sample_categories {
        categories::create_category(
            db,
            CreateCategory {
                name: name.to_string(),
                slug: None,
                description: Some(description.to_string()),
                icon: Some(icon.to_string()),
            },
        )?;
    }

    let category_id = |slug: &str| -> Result<i64> {
        categories::get_category_by_slug(db, slug)?
            .map(|c| c.id)
            .ok_or_else(|| anyhow!("Seed category '{}' missing", slug))
    };

    let algebra = category_id("algebra")?;
    let geometry = category_id("geometry")?;
    let trigonometry = category_id("trigonometry")?;

    let quadratics = topics::create_topic(
        db,
        CreateTopic {
            title: "Quadratic Equations".to_string(),
            slug: None,
            description: Some(
                "Learn how to solve quadratic equations using various methods.".to_string(),
            ),
            content: r#"
<h3>What is a Quadratic Equation?</h3>
<p>A quadratic equation is a polynomial equation of degree 2, written in the form:</p>
<p><strong>ax² + bx + c = 0</strong></p>
<p>where a, b, and c are coefficients and a ≠ 0.</p>

<h3>Methods to Solve Quadratic Equations</h3>
<ol>
    <li><strong>Factoring:</strong> Factor the equation and set each factor to zero</li>
    <li><strong>Quadratic Formula:</strong> x = (-b ± √(b² - 4ac)) / 2a</li>
    <li><strong>Completing the Square:</strong> Rearrange to form a perfect square</li>
    <li><strong>Graphing:</strong> Find where the parabola crosses the x-axis</li>
</ol>

<h3>Discriminant</h3>
<p>The discriminant Δ = b² - 4ac determines the nature of roots:</p>
<ul>
    <li>Δ &gt; 0: Two distinct real roots</li>
    <li>Δ = 0: One repeated real root</li>
    <li>Δ &lt; 0: Two complex conjugate roots</li>
</ul>
"#
            .to_string(),
            category_id: algebra,
            difficulty: Difficulty::Intermediate,
        },
    )?;

    formulas::add_formula(
        db,
        quadratics,
        CreateFormula {
            title: "Quadratic Formula".to_string(),
            latex: r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}".to_string(),
            description: Some("General formula for solving quadratic equations".to_string()),
        },
    )?;
    formulas::add_formula(
        db,
        quadratics,
        CreateFormula {
            title: "Discriminant".to_string(),
            latex: r"\Delta = b^2 - 4ac".to_string(),
            description: Some("Determines the nature of roots".to_string()),
        },
    )?;

    examples::add_example(
        db,
        quadratics,
        CreateExample {
            title: "Solving x² - 5x + 6 = 0".to_string(),
            problem: "Solve the equation: x² - 5x + 6 = 0".to_string(),
            solution: "Using the quadratic formula: x² - 5x + 6 = (x - 2)(x - 3) = 0, so x = 2 or x = 3"
                .to_string(),
        },
    )?;

    topics::create_topic(
        db,
        CreateTopic {
            title: "Linear Equations".to_string(),
            slug: None,
            description: Some(
                "Master the fundamentals of linear equations and systems.".to_string(),
            ),
            content: r#"
<h3>Linear Equations</h3>
<p>A linear equation is an equation of the first degree. Standard form: ax + b = 0</p>
<p>Solving: x = -b/a</p>
<h3>Systems of Linear Equations</h3>
<p>Methods to solve systems:</p>
<ul>
    <li>Substitution Method</li>
    <li>Elimination Method</li>
    <li>Matrix Method</li>
</ul>
"#
            .to_string(),
            category_id: algebra,
            difficulty: Difficulty::Beginner,
        },
    )?;

    topics::create_topic(
        db,
        CreateTopic {
            title: "Pythagorean Theorem".to_string(),
            slug: None,
            description: Some(
                "Understanding the relationship between sides of a right triangle.".to_string(),
            ),
            content: r#"
<h3>Pythagorean Theorem</h3>
<p>In a right triangle, the square of the hypotenuse equals the sum of squares of the other two sides.</p>
<p><strong>a² + b² = c²</strong></p>
<h3>Applications</h3>
<ul>
    <li>Finding distances</li>
    <li>Checking if triangles are right triangles</li>
    <li>3D geometry calculations</li>
</ul>
"#
            .to_string(),
            category_id: geometry,
            difficulty: Difficulty::Intermediate,
        },
    )?;

    topics::create_topic(
        db,
        CreateTopic {
            title: "Sine, Cosine, and Tangent".to_string(),
            slug: None,
            description: Some(
                "Fundamental trigonometric ratios and their applications.".to_string(),
            ),
            content: r#"
<h3>Trigonometric Ratios</h3>
<p>In a right triangle:</p>
<ul>
    <li>sin(θ) = opposite / hypotenuse</li>
    <li>cos(θ) = adjacent / hypotenuse</li>
    <li>tan(θ) = opposite / adjacent</li>
</ul>
<h3>SOHCAHTOA</h3>
<p>A helpful mnemonic: Sine = Opposite/Hypotenuse, Cosine = Adjacent/Hypotenuse, Tangent = Opposite/Adjacent</p>
"#
            .to_string(),
            category_id: trigonometry,
            difficulty: Difficulty::Intermediate,
        },
    )?;

    Ok(())
}
