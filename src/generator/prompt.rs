use crate::generator::content_type::ContentType;

/// System instruction sent ahead of every prompt.
pub const PERSONA: &str =
    "You are a creative AI assistant specialized in generating witty and clever content.";

struct Template {
    headline: &'static str,
    requirements: [&'static str; 4],
    plural: &'static str,
}

fn template(kind: ContentType) -> Template {
    match kind {
        ContentType::Puns => Template {
            headline: "clever puns",
            requirements: [
                "Each pun should be witty and original",
                "Include wordplay that relates to the topic",
                "Keep them family-friendly",
                "Make them memorable and shareable",
            ],
            plural: "puns",
        },
        ContentType::Jokes => Template {
            headline: "original jokes",
            requirements: [
                "Each joke should be clever and witty",
                "Include setup and punchline",
                "Keep them family-friendly",
                "Make them engaging and memorable",
            ],
            plural: "jokes",
        },
        ContentType::Wordplay => Template {
            headline: "creative wordplay examples",
            requirements: [
                "Use clever linguistic techniques",
                "Include double meanings or homophones",
                "Keep them family-friendly",
                "Make them intellectually engaging",
            ],
            plural: "wordplay examples",
        },
        ContentType::Riddles => Template {
            headline: "clever riddles",
            requirements: [
                "Each riddle should be challenging but solvable",
                "Include wordplay and clever misdirection",
                "Keep them family-friendly",
                "Make them thought-provoking",
            ],
            plural: "riddles",
        },
        ContentType::Epigrams => Template {
            headline: "witty epigrams",
            requirements: [
                "Each epigram should be concise and memorable",
                "Include clever observations or paradoxes",
                "Keep them family-friendly",
                "Make them thought-provoking",
            ],
            plural: "epigrams",
        },
    }
}

/// Builds the instruction text for `topic`. The topic is quoted verbatim.
pub fn compose_prompt(topic: &str, kind: ContentType) -> String {
    let template = template(kind);
    let mut prompt = format!(
        "Generate 5 {} about \"{topic}\".\nRequirements:\n",
        template.headline
    );
    for line in template.requirements {
        prompt.push_str("- ");
        prompt.push_str(line);
        prompt.push('\n');
    }
    prompt.push_str(&format!(
        "\nReturn only the 5 {}, one per line, without numbers or additional text.",
        template.plural
    ));
    prompt
}

/// Same as [`compose_prompt`] for a raw tag; unknown tags use the puns template.
pub fn compose_prompt_for_tag(topic: &str, tag: &str) -> String {
    let (kind, _) = ContentType::normalize(tag);
    compose_prompt(topic, kind)
}
