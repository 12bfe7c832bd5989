//! Instruction templates for the three card adapters.

use crate::generator::{ImageRequest, ProductRequest, WitRequest};

/// Prompt for one satirical line about a professional.
pub fn wit_prompt(input: &WitRequest) -> String {
    let bio_line = input
        .bio
        .as_deref()
        .map(str::trim)
        .filter(|b| !b.is_empty())
        .map(|b| format!("Professional's Bio: {b}\n"))
        .unwrap_or_default();

    format!(
        r#"You are a world-class copywriter for theexecutivejokester.com, specializing in "Intelligence-Based Satire" for a sophisticated, professional audience. Your humor is sharp and understands the absurdities of corporate and executive life.

Your task is to write one incisive satirical line for a professional's sharing card. The line must be no more than two sentences.

Professional's Name: {name}
Professional's Title: {title}
Theme: {theme}
{bio_line}
Use these techniques:
1. Juxtaposition: pair high-brow corporate concepts with relatable, low-brow realities. (e.g. "My Q4 projections are bullish, but my desire to attend this 8 AM meeting is deeply bearish.")
2. Parody of form: frame the line as an official corporate announcement. (e.g. "Per my last email, I'm the only one who will answer your call after 5 PM.")
3. Linguistic irony: use buzzwords like 'synergy', 'leverage' or 'pivot' in absurd, personal contexts. (e.g. "I'm leveraging my core competencies to pivot from this conversation.")

Avoid broad, crude or simple humor. The line should be social currency: something the reader shares because it makes them look witty.

Examples of the required style:
- "My only KPI is your happiness. And my bonus. But mostly your happiness."
- "Let's synergize on your quarterly goals. I'll handle the disruptive innovation in the coffee machine."
- "Currently disrupting the paradigm of my own attention span."
- "I have the bandwidth to take on your project, just not the will."

Respond with JSON of the form {{"satiricalWit": "<line>"}}."#,
        name = input.name.trim(),
        title = input.title.trim(),
        theme = input.theme,
    )
}

/// Instruction sent alongside the user's photo.
pub fn image_prompt(input: &ImageRequest) -> String {
    format!(
        "Redraw this person in a satirical comic book style that captures the essence of a '{name}'. \
         This persona is described as: \"{description}\". \
         Emphasize the satirical and humorous aspects of this professional archetype. \
         The background should be simple and not distract from the character.",
        name = input.persona_name.trim(),
        description = input.persona_description.trim(),
    )
}

/// Prompt for one or two "corporate survival gear" suggestions.
pub fn products_prompt(input: &ProductRequest) -> String {
    format!(
        r#"You are an expert at finding the perfect, slightly absurd "corporate survival gear". Suggest 1-2 products that would humorously "solve" the problem of the professional persona below.

Suggestions should be genuinely useful but framed with a satirical tone.

Persona Name: {name}
Persona Description: {description}

For each idea give a witty call-to-action for the button text ('productName') and a practical, concise shopping search query ('searchQuery').

Example:
Persona: "Pyromancer of Files"
Description: "Finds catharsis in mass-deleting legacy documents."
Output:
{{"products": [
  {{"productName": "A Paper Shredder for Ultimate Catharsis", "searchQuery": "heavy duty paper shredder"}},
  {{"productName": "An 'Undo' Button for Real Life", "searchQuery": "novelty big red button"}}
]}}

Respond with JSON only."#,
        name = input.persona_name.trim(),
        description = input.persona_description.trim(),
    )
}
