mod hooks;
mod widgets;

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::content::{ContentError, Portfolio};
use crate::cursor::{CursorVariant, PointerPosition};
use crate::navigation::{ScrollRequest, SectionBounds, SectionId};
use crate::page::{PageEvent, PageState};
use hooks::use_window_event;
use widgets::{
    AnimatedText, CursorFollower, EducationList, FloatingParticles, LanguageBars, ProjectGrid,
    Reveal, SkillBar, Timeline,
};

const SKILL_STAGGER_MS: u32 = 100;

#[derive(Clone, PartialEq)]
struct PageModel(PageState);

impl Reducible for PageModel {
    type Action = PageEvent;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        next.apply(action);
        Rc::new(Self(next))
    }
}

type SectionRefs = Rc<Vec<(SectionId, NodeRef)>>;

fn section_ref(refs: &SectionRefs, id: SectionId) -> NodeRef {
    refs.iter()
        .find(|(section, _)| *section == id)
        .map(|(_, node)| node.clone())
        .unwrap_or_default()
}

fn section_bounds(node: &NodeRef) -> Option<SectionBounds> {
    let element = node.cast::<HtmlElement>()?;
    Some(SectionBounds {
        offset_top: f64::from(element.offset_top()),
        height: f64::from(element.offset_height()),
    })
}

fn read_scroll(refs: &SectionRefs) -> Option<PageEvent> {
    let win = window()?;
    let scroll_y = win.scroll_y().ok()?;
    let viewport_height = win.inner_height().ok()?.as_f64()?;
    let document_height = f64::from(win.document()?.document_element()?.scroll_height());

    Some(PageEvent::Scrolled {
        scroll_y,
        document_height,
        viewport_height,
        sections: refs
            .iter()
            .map(|(id, node)| (*id, section_bounds(node)))
            .collect(),
    })
}

fn perform_scroll(refs: &SectionRefs, request: ScrollRequest) {
    let Some(element) = section_ref(refs, request.target).cast::<HtmlElement>() else {
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if request.smooth {
        ScrollBehavior::Smooth
    } else {
        ScrollBehavior::Auto
    });
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    active: SectionId,
    on_navigate: Callback<SectionId>,
    #[prop_or_default]
    on_hover: Callback<CursorVariant>,
    class: &'static str,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <ul class={props.class}>
            { for SectionId::ALL.iter().map(|section| {
                let section = *section;
                let is_active = props.active == section;
                let onclick = {
                    let on_navigate = props.on_navigate.clone();
                    Callback::from(move |_: MouseEvent| on_navigate.emit(section))
                };
                let onmouseenter = {
                    let on_hover = props.on_hover.clone();
                    Callback::from(move |_: MouseEvent| on_hover.emit(CursorVariant::Hover))
                };
                let onmouseleave = {
                    let on_hover = props.on_hover.clone();
                    Callback::from(move |_: MouseEvent| on_hover.emit(CursorVariant::Default))
                };

                html! {
                    <li key={section.anchor()}>
                        <button
                            type="button"
                            class={classes!("nav-link", is_active.then_some("is-active"))}
                            aria-current={is_active.then_some("location")}
                            onclick={onclick}
                            onmouseenter={onmouseenter}
                            onmouseleave={onmouseleave}
                        >
                            {section.label()}
                        </button>
                    </li>
                }
            }) }
        </ul>
    }
}

#[derive(Properties, PartialEq)]
struct PortfolioPageProps {
    portfolio: Rc<Portfolio>,
}

#[function_component(PortfolioPage)]
fn portfolio_page(props: &PortfolioPageProps) -> Html {
    let portfolio = &props.portfolio;
    let page = use_reducer_eq(|| PageModel(PageState::default()));
    let section_refs: SectionRefs = use_memo((), |_| {
        SectionId::ALL
            .iter()
            .map(|id| (*id, NodeRef::default()))
            .collect::<Vec<_>>()
    });

    {
        let dispatcher = page.dispatcher();
        let refs = section_refs.clone();
        use_effect_with((), move |_| {
            if let Some(event) = read_scroll(&refs) {
                dispatcher.dispatch(event);
            }
            || ()
        });
    }

    {
        let dispatcher = page.dispatcher();
        let refs = section_refs.clone();
        use_window_event("scroll", move |_| {
            if let Some(event) = read_scroll(&refs) {
                dispatcher.dispatch(event);
            }
        });
    }

    {
        let dispatcher = page.dispatcher();
        use_window_event("mousemove", move |event| {
            let Some(mouse) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            dispatcher.dispatch(PageEvent::PointerSampled {
                position: PointerPosition::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())),
                at_ms: js_sys::Date::now(),
            });
        });
    }

    {
        let refs = section_refs.clone();
        use_effect_with(page.0.scroll_request, move |request| {
            if let Some((_, request)) = request {
                perform_scroll(&refs, *request);
            }
            || ()
        });
    }

    let on_navigate = {
        let dispatcher = page.dispatcher();
        Callback::from(move |section: SectionId| dispatcher.dispatch(PageEvent::Navigate(section)))
    };
    let on_hover = {
        let dispatcher = page.dispatcher();
        Callback::from(move |variant: CursorVariant| {
            dispatcher.dispatch(PageEvent::CursorVariantChanged(variant))
        })
    };
    let on_toggle_menu = {
        let dispatcher = page.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(PageEvent::ToggleMenu))
    };
    let navigate_to = |section: SectionId| {
        let on_navigate = on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit(section))
    };
    let section_node = |section: SectionId| section_ref(&section_refs, section);

    let profile = &portfolio.profile;
    let skills = &portfolio.skills;
    let languages = Rc::new(portfolio.languages.clone());
    let experience = Rc::new(portfolio.experience.clone());
    let projects = Rc::new(portfolio.projects.clone());
    let education = Rc::new(portfolio.education.clone());
    let links = &portfolio.links;
    let contact = &portfolio.contact;
    let menu_open = page.0.menu_open();

    html! {
        <>
            <FloatingParticles />
            <CursorFollower pointer={page.0.pointer} variant={page.0.cursor_variant} />
            <div class="scroll-progress" style={page.0.progress_style()} aria-hidden="true"></div>

            <header class="site-header" style={page.0.header_style()}>
                <div class="header-bar">
                    <span class="brand">{profile.name.clone()}</span>
                    <nav class="desktop-nav" aria-label="Sections">
                        <NavLinks
                            class="nav-list"
                            active={page.0.active()}
                            on_navigate={on_navigate.clone()}
                            on_hover={on_hover.clone()}
                        />
                    </nav>
                    <button
                        type="button"
                        class={classes!("menu-toggle", menu_open.then_some("is-open"))}
                        aria-label="Toggle menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={on_toggle_menu}
                    >
                        <span aria-hidden="true">{"⌄"}</span>
                    </button>
                </div>
                if menu_open {
                    <nav class="mobile-nav" aria-label="Sections">
                        <NavLinks
                            class="mobile-nav-list"
                            active={page.0.active()}
                            on_navigate={on_navigate.clone()}
                        />
                    </nav>
                }
            </header>

            <main id="content">
                <section id={SectionId::Home.anchor()} ref={section_node(SectionId::Home)} class="section hero">
                    <div class="hero-copy">
                        if !profile.badge.is_empty() {
                            <span class="pill">{profile.badge.clone()}</span>
                        }
                        <p class="eyebrow">{profile.tagline.clone()}</p>
                        <h1>
                            <AnimatedText key={profile.name.clone()} text={profile.name.clone()} />
                        </h1>
                        <p class="headline">{profile.headline.clone()}</p>
                        <p class="muted summary">{profile.summary.clone()}</p>
                        <div class="cta-row">
                            <button type="button" class="button primary" onclick={navigate_to(SectionId::Contact)}>
                                {"Contact Me →"}
                            </button>
                            <button type="button" class="button" onclick={navigate_to(SectionId::Projects)}>
                                {"View Projects"}
                            </button>
                        </div>
                        <ul class="social-row">
                            <li><a class="link" href={links.professional.clone()} target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a></li>
                            <li><a class="link" href={links.code_host.clone()} target="_blank" rel="noopener noreferrer">{"GitHub"}</a></li>
                            <li><a class="link" href={contact.mailto()}>{"Email"}</a></li>
                        </ul>
                    </div>
                    <figure class="portrait">
                        <img src={profile.portrait_src().to_string()} alt={profile.name.clone()} />
                        if !profile.role.is_empty() {
                            <figcaption class="role-chip">{profile.role.clone()}</figcaption>
                        }
                    </figure>
                    <button
                        type="button"
                        class="scroll-cue"
                        aria-label="Scroll to about"
                        onclick={navigate_to(SectionId::About)}
                    >
                        {"⌄"}
                    </button>
                </section>

                <section id={SectionId::About.anchor()} ref={section_node(SectionId::About)} class="section">
                    <Reveal class="section-heading"><h2>{"About Me"}</h2></Reveal>
                    <div class="two-column">
                        <Reveal delay_s={0.2}>
                            <h3>{"Who I Am"}</h3>
                            { for profile.about.iter().map(|paragraph| html! { <p class="panel">{paragraph.clone()}</p> }) }
                            <h3>{"Key Competencies"}</h3>
                            <ul class="competency-grid">
                                { for portfolio.competencies.iter().map(|item| html! { <li key={item.clone()}>{item.clone()}</li> }) }
                            </ul>
                        </Reveal>
                        <Reveal delay_s={0.4}>
                            <h3>{"Technical Skills"}</h3>
                            <div class="panel skill-list">
                                { for skills.iter().enumerate().map(|(index, skill)| html! {
                                    <SkillBar
                                        key={skill.name.clone()}
                                        name={skill.name.clone()}
                                        level={skill.level}
                                        delay_ms={SKILL_STAGGER_MS * index as u32}
                                    />
                                }) }
                            </div>
                            if !languages.is_empty() {
                                <h3>{"Languages"}</h3>
                                <div class="panel">
                                    <LanguageBars languages={languages.clone()} />
                                </div>
                            }
                        </Reveal>
                    </div>
                </section>

                <section id={SectionId::Experience.anchor()} ref={section_node(SectionId::Experience)} class="section">
                    <Reveal class="section-heading"><h2>{"Experience"}</h2></Reveal>
                    <Timeline entries={experience} />
                </section>

                <section id={SectionId::Projects.anchor()} ref={section_node(SectionId::Projects)} class="section">
                    <Reveal class="section-heading"><h2>{"Projects"}</h2></Reveal>
                    <ProjectGrid projects={projects} code_host={links.code_host.clone()} />
                    <Reveal class="more-projects" delay_s={0.4}>
                        <a class="button" href={links.code_host.clone()} target="_blank" rel="noopener noreferrer">
                            {"View More Projects"}
                            <span class="external-mark" aria-hidden="true">{"↗"}</span>
                        </a>
                    </Reveal>
                </section>

                <section id={SectionId::Education.anchor()} ref={section_node(SectionId::Education)} class="section">
                    <Reveal class="section-heading"><h2>{"Education"}</h2></Reveal>
                    <EducationList entries={education} />
                </section>

                <section id={SectionId::Contact.anchor()} ref={section_node(SectionId::Contact)} class="section">
                    <Reveal class="section-heading"><h2>{"Get In Touch"}</h2></Reveal>
                    <Reveal class="panel contact-card" delay_s={0.2}>
                        <dl class="contact-list">
                            <dt>{"Email"}</dt>
                            <dd><a class="link" href={contact.mailto()}>{contact.email.clone()}</a></dd>
                            if !contact.phone.is_empty() {
                                <dt>{"Phone"}</dt>
                                <dd>{contact.phone.clone()}</dd>
                            }
                            if !contact.location.is_empty() {
                                <dt>{"Location"}</dt>
                                <dd>{contact.location.clone()}</dd>
                            }
                        </dl>
                        <a class="button primary" href={links.professional.clone()} target="_blank" rel="noopener noreferrer">
                            {"Connect on LinkedIn"}
                        </a>
                    </Reveal>
                </section>
            </main>

            <footer class="site-footer">
                <p class="muted">{format!("© {} {}. All rights reserved.", current_year(), profile.name)}</p>
            </footer>
        </>
    }
}

#[function_component(App)]
fn app() -> Html {
    let portfolio = use_memo((), |_| Portfolio::embedded().map(Rc::new));

    match portfolio.as_ref() {
        Ok(portfolio) => html! { <PortfolioPage portfolio={portfolio.clone()} /> },
        Err(error) => render_content_error(error),
    }
}

fn render_content_error(error: &ContentError) -> Html {
    gloo::console::error!(format!("{error}"));

    html! {
        <main id="content" class="content-error">
            <p>{"This page could not be loaded."}</p>
        </main>
    }
}

pub fn run() {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("app"))
    else {
        gloo::console::error!("missing #app mount point");
        return;
    };

    yew::Renderer::<App>::with_root(root).render();
}
