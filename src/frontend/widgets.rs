use std::rc::Rc;

use gloo::timers::callback::{Interval, Timeout};
use yew::prelude::*;

use super::hooks::{use_in_view_once, VIEWPORT_MARGIN};
use crate::content::{EducationEntry, ExperienceEntry, LanguageEntry, ProjectEntry};
use crate::counter::{CounterSchedule, SkillCounter};
use crate::cursor::{inner_ring, outer_ring, CursorVariant, PointerPosition};
use crate::particles::{generate_field, PARTICLE_COUNT};
use crate::timeline::{layout, TimelineSlot};
use crate::typewriter::{Typewriter, CARET};

#[derive(Properties, PartialEq)]
pub struct AnimatedTextProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Reveals `text` one character at a time. Key the component on the text to
/// restart the effect with a new string.
#[function_component(AnimatedText)]
pub fn animated_text(props: &AnimatedTextProps) -> Html {
    let typewriter = {
        let text = props.text.to_string();
        let delay_ms = props.delay_ms;
        use_state(move || Typewriter::new(text, delay_ms))
    };

    {
        let typewriter = typewriter.clone();
        use_effect_with(typewriter.revealed_len(), move |_| {
            let pending = typewriter.next_delay_ms().map(|delay| {
                let handle = typewriter.clone();
                Timeout::new(delay, move || {
                    let mut next = (*handle).clone();
                    next.advance();
                    handle.set(next);
                })
            });
            move || drop(pending)
        });
    }

    html! {
        <span class="typewriter" aria-label={props.text.clone()}>
            <span class="typewriter-ghost" aria-hidden="true">{props.text.clone()}</span>
            <span class="typewriter-text" aria-hidden="true">
                {typewriter.revealed().to_string()}
                if typewriter.shows_caret() {
                    <span class="typewriter-caret">{CARET}</span>
                }
            </span>
        </span>
    }
}

enum CounterAction {
    Reveal,
    Start,
    Tick,
}

#[derive(PartialEq)]
struct CounterCell(SkillCounter);

impl Reducible for CounterCell {
    type Action = CounterAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0;
        match action {
            CounterAction::Reveal => {
                next.reveal();
            }
            CounterAction::Start => next.start_counting(),
            CounterAction::Tick => {
                next.tick();
            }
        }
        Rc::new(Self(next))
    }
}

#[derive(Properties, PartialEq)]
pub struct SkillBarProps {
    pub name: AttrValue,
    pub level: u8,
    #[prop_or_default]
    pub delay_ms: u32,
}

#[function_component(SkillBar)]
pub fn skill_bar(props: &SkillBarProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(&node, "0px");
    let counter = {
        let level = props.level;
        let delay_ms = props.delay_ms;
        use_reducer_eq(move || CounterCell(SkillCounter::new(level, delay_ms)))
    };

    {
        let dispatcher = counter.dispatcher();
        let schedule = counter.0.schedule(visible);
        use_effect_with(schedule, move |schedule| {
            let mut delay = None;
            let mut step = None;

            match *schedule {
                CounterSchedule::Reveal => dispatcher.dispatch(CounterAction::Reveal),
                CounterSchedule::Wait(delay_ms) => {
                    delay = Some(Timeout::new(delay_ms, move || {
                        dispatcher.dispatch(CounterAction::Start)
                    }));
                }
                CounterSchedule::Step(step_ms) => {
                    step = Some(Interval::new(step_ms, move || {
                        dispatcher.dispatch(CounterAction::Tick)
                    }));
                }
                CounterSchedule::Idle => {}
            }

            move || {
                drop(delay);
                drop(step);
            }
        });
    }

    let entrance = format!("transition-delay: {:.2}s;", f64::from(props.delay_ms) / 1_000.0);

    html! {
        <div ref={node} class={classes!("skill", visible.then_some("is-visible"))} style={entrance}>
            <div class="skill-header">
                <span class="skill-name">
                    <span class="skill-dot" aria-hidden="true"></span>
                    {props.name.clone()}
                </span>
                <span class="skill-value">{counter.0.readout()}</span>
            </div>
            <div
                class="bar"
                role="progressbar"
                aria-label={props.name.clone()}
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow={counter.0.value().to_string()}
            >
                <div class="bar-fill" style={counter.0.fill_style()}></div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LanguageBarsProps {
    pub languages: Rc<Vec<LanguageEntry>>,
}

#[function_component(LanguageBars)]
pub fn language_bars(props: &LanguageBarsProps) -> Html {
    html! {
        <div class="language-grid">
            { for props.languages.iter().map(|language| {
                let fill = format!("transform: scaleX({:.2});", f64::from(language.level) / 100.0);
                html! {
                    <div class="language" key={language.name.clone()}>
                        <div class="skill-header">
                            <span>{language.name.clone()}</span>
                            <span class="muted">{language.proficiency.clone()}</span>
                        </div>
                        <div class="bar" aria-hidden="true">
                            <div class="bar-fill" style={fill}></div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CursorFollowerProps {
    pub pointer: PointerPosition,
    pub variant: CursorVariant,
}

#[function_component(CursorFollower)]
pub fn cursor_follower(props: &CursorFollowerProps) -> Html {
    let outer = outer_ring(props.pointer, props.variant);
    let inner = inner_ring(props.pointer);

    html! {
        <>
            <div
                class={classes!("cursor-ring", format!("cursor-{}", props.variant.as_str()))}
                style={outer.style()}
                aria-hidden="true"
            ></div>
            <div class="cursor-dot" style={inner.style()} aria-hidden="true"></div>
        </>
    }
}

#[function_component(FloatingParticles)]
pub fn floating_particles() -> Html {
    let particles = use_memo((), |_| generate_field(PARTICLE_COUNT, js_sys::Math::random));

    html! {
        <div class="particle-field" aria-hidden="true">
            { for particles.iter().map(|particle| html! {
                <div
                    key={particle.id}
                    class={classes!("particle", particle.tone.class())}
                    style={particle.style()}
                ></div>
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub delay_s: f64,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(&node, VIEWPORT_MARGIN);
    let style = format!("transition-delay: {:.2}s;", props.delay_s);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), visible.then_some("is-visible"))}
            style={style}
        >
            {props.children.clone()}
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TimelineCardProps {
    slot: TimelineSlot,
    entry: ExperienceEntry,
}

#[function_component(TimelineCard)]
fn timeline_card(props: &TimelineCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view_once(&node, VIEWPORT_MARGIN);
    let entry = &props.entry;

    html! {
        <div class={classes!("timeline-row", props.slot.side.class())}>
            <span class={classes!("timeline-dot", visible.then_some("is-visible"))} aria-hidden="true"></span>
            <article
                ref={node}
                class={classes!("timeline-card", visible.then_some("is-visible"))}
                style={props.slot.card_style(visible)}
            >
                <h3>{entry.title.clone()}</h3>
                <p class="muted">{entry.organization.clone()}</p>
                <span class="badge">{entry.period.clone()}</span>
                <p>{entry.description.clone()}</p>
            </article>
            <div class="timeline-spacer" aria-hidden="true"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TimelineProps {
    pub entries: Rc<Vec<ExperienceEntry>>,
}

#[function_component(Timeline)]
pub fn timeline(props: &TimelineProps) -> Html {
    html! {
        <div class="timeline">
            <div class="timeline-spine" aria-hidden="true"></div>
            { for layout(props.entries.len()).into_iter().zip(props.entries.iter()).map(|(slot, entry)| html! {
                <TimelineCard key={slot.index} slot={slot} entry={entry.clone()} />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: ProjectEntry,
    index: usize,
    code_host: AttrValue,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let hovered = use_state_eq(|| false);
    let project = &props.project;

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };

    html! {
        <Reveal class="project-card" delay_s={0.1 * props.index as f64}>
            <article
                class={classes!("card", hovered.then_some("is-hovered"))}
                onmouseenter={onmouseenter}
                onmouseleave={onmouseleave}
            >
                <div class="card-media">
                    <img src={project.image_src().to_string()} alt={project.title.clone()} loading="lazy" />
                    <span class="badge">{project.period.clone()}</span>
                </div>
                <h3>{project.title.clone()}</h3>
                <p class="muted">{project.description.clone()}</p>
                <ul class="tag-list">
                    { for project.tags.iter().map(|tag| html! { <li key={tag.clone()} class="tag">{tag.clone()}</li> }) }
                </ul>
                <a class="link" href={props.code_host.clone()} target="_blank" rel="noopener noreferrer">
                    {"View code"}
                    <span class="external-mark" aria-hidden="true">{"↗"}</span>
                </a>
            </article>
        </Reveal>
    }
}

#[derive(Properties, PartialEq)]
pub struct ProjectGridProps {
    pub projects: Rc<Vec<ProjectEntry>>,
    pub code_host: AttrValue,
}

#[function_component(ProjectGrid)]
pub fn project_grid(props: &ProjectGridProps) -> Html {
    html! {
        <div class="project-grid">
            { for props.projects.iter().enumerate().map(|(index, project)| html! {
                <ProjectCard
                    key={project.title.clone()}
                    project={project.clone()}
                    index={index}
                    code_host={props.code_host.clone()}
                />
            }) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct EducationListProps {
    pub entries: Rc<Vec<EducationEntry>>,
}

#[function_component(EducationList)]
pub fn education_list(props: &EducationListProps) -> Html {
    html! {
        <div class="education-stack">
            { for props.entries.iter().enumerate().map(|(index, entry)| html! {
                <Reveal key={entry.degree.clone()} class="education-item" delay_s={0.1 * index as f64}>
                    <h3>{entry.degree.clone()}</h3>
                    <p class="muted">{entry.institution.clone()}</p>
                    <span class="badge">{entry.period.clone()}</span>
                    <p class="score">{entry.score.clone()}</p>
                </Reveal>
            }) }
        </div>
    }
}
