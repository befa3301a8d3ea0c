use journey_core::model::Document;
use services::JourneySession;

#[derive(Clone, Debug, PartialEq)]
pub struct StoryVm {
    pub index: usize,
    pub title: String,
    pub content: Document,
    pub position_label: String,
}

#[must_use]
pub fn map_story(session: &JourneySession) -> StoryVm {
    let index = session.state().slide().index();
    let slide = session.current_slide();
    StoryVm {
        index,
        title: slide.title().to_string(),
        content: slide.content().clone(),
        position_label: format!("{} / {}", index + 1, session.course().slides().len()),
    }
}
