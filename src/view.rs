use leptos::prelude::*;

use crate::annotate::AnnotationInjector;
use crate::config::{SiblinksConfig, OVERLAY_CLASS};
use crate::dom::WebPage;
use crate::model::Model;
use crate::normalize::StandardNormalizer;
use crate::projection;
use crate::protocol::BackLink;

#[component]
pub fn LinkList(links: Vec<BackLink>, label: String) -> impl IntoView {
    view! {
        <section class="links">
            <h2 class="links-label">{label}</h2>
            <ul class="links-list">
                {links.into_iter().map(|link| {
                    let text = link.label().to_string();
                    let title = link.referrer.description.clone().unwrap_or_default();
                    view! {
                        <li class="link">
                            <a href=link.referrer.url title=title>{text}</a>
                        </li>
                    }
                }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

/// Memoized link list for one surface. Downstream views only rerun when the list
/// itself changes, not on every hover phase or geometry update.
pub fn links_memo(
    model: Signal<Model>,
    project: fn(&Model) -> Option<&[BackLink]>,
) -> Memo<Option<Vec<BackLink>>> {
    Memo::new(move |_| model.with(|m| project(m).map(<[BackLink]>::to_vec)))
}

pub fn sidebar_links(model: &Model) -> Option<&[BackLink]> {
    Some(projection::sidebar(model).links)
}

pub fn tooltip_links(model: &Model) -> Option<&[BackLink]> {
    projection::tooltip(model).map(|tooltip| tooltip.links)
}

pub fn bubble_links(model: &Model) -> Option<&[BackLink]> {
    projection::bubble(model).map(|bubble| bubble.links)
}

#[component]
pub fn Sidebar(#[prop(into)] model: Signal<Model>, config: SiblinksConfig) -> impl IntoView {
    let mode = move || model.with(|m| projection::sidebar(m).mode.as_str());
    let links = links_memo(model, sidebar_links);

    view! {
        <aside class=format!("panel {OVERLAY_CLASS}") data-mode=mode>
            {move || {
                view! {
                    <LinkList links=links.get().unwrap_or_default() label=config.label.clone() />
                }
            }}
        </aside>
    }
}

#[component]
pub fn Tooltip(#[prop(into)] model: Signal<Model>, config: SiblinksConfig) -> impl IntoView {
    let links = links_memo(model, tooltip_links);
    let open = move || model.with(|m| projection::tooltip(m).is_some_and(|t| t.open));
    let style = move || model.with(|m| projection::tooltip(m).map(|t| t.style()).unwrap_or_default());

    move || {
        links.get().map(|links| {
            view! {
                <dialog class=format!("tooltip {OVERLAY_CLASS}") open=open style=style>
                    <LinkList links=links label=config.label.clone() />
                </dialog>
            }
        })
    }
}

#[component]
pub fn Bubble(#[prop(into)] model: Signal<Model>, config: SiblinksConfig) -> impl IntoView {
    let links = links_memo(model, bubble_links);
    let class = move || model.with(|m| projection::bubble(m).map(|b| b.class()).unwrap_or_default());
    let style = move || model.with(|m| projection::bubble(m).map(|b| b.style()).unwrap_or_default());

    move || {
        links.get().map(|links| {
            let summary = config.count_label(links.len());
            view! {
                <button class=class style=style>
                    <div class="summary">{summary}</div>
                    <div class="details">
                        <LinkList links=links label=config.label.clone() />
                    </div>
                </button>
            }
        })
    }
}

/// Sidebar, tooltip and bubble, plus the inline annotation pass bound to the model.
#[component]
pub fn SiblinksApp(model: RwSignal<Model>, config: SiblinksConfig) -> impl IntoView {
    let annotation_config = config.clone();
    let mut injector = AnnotationInjector::new();

    Effect::new(move |_| {
        model.with(|m| {
            if m.link_index.is_none() {
                return;
            }
            match WebPage::current() {
                Ok(page) => {
                    injector.run(m, &page, &StandardNormalizer, &annotation_config);
                }
                Err(err) => log::warn!("cannot annotate links: {err}"),
            }
        });
    });

    view! {
        <Sidebar model=model config=config.clone() />
        <Tooltip model=model config=config.clone() />
        <Bubble model=model config=config />
    }
}
