//! Horizontal survey form demo
//!
//! This example arranges a short rating survey with the horizontal layout:
//! one row of question labels above one row of controls.

use formapi::{Form, Layout, Method, RadioField, Result, SelectField, SubmitField};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    println!("📋 Creating survey form demo...");

    let mut form = Form::new("survey");
    form.set_target("survey.php");
    form.set_method(Method::Get);
    form.set_layout(Layout::Horizontal);
    form.set_title("title");

    form.add_message("title", "en", "How did we do?");
    form.add_message("overall", "en", "Overall");
    form.add_message("support", "en", "Support");
    form.add_message("recommend", "en", "Would you recommend us?");
    form.add_message("send", "en", "Submit answers");
    for score in 1..=5 {
        form.add_message(format!("score.{}", score), "en", score.to_string());
    }
    form.add_message("yes", "en", "Yes");
    form.add_message("no", "en", "No");

    // Rating scales: five radio buttons on a single grid row
    let scores: Vec<String> = (1..=5).map(|s| format!("score.{}", s)).collect();
    form.add_field(
        RadioField::new("overall")
            .with_label("overall")
            .with_options(scores.clone())
            .with_length(0),
    );
    form.add_field(
        RadioField::new("support")
            .with_label("support")
            .with_options(scores)
            .with_length(0),
    );

    form.add_field(
        SelectField::new("recommend")
            .with_label("recommend")
            .add_option("yes")
            .add_option("no"),
    );
    form.add_field(SubmitField::new("send").with_label("send"));

    form.validate()?;
    form.save("survey_form.html", "en", true)?;

    println!("✅ Created survey_form.html");
    println!("   {} questions, horizontal layout", form.fields().len() - 1);

    Ok(())
}
