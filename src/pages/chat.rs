//! Conversational AI page: conversation list, message thread, attachments.
//!
//! SYSTEM CONTEXT
//! ==============
//! The user message is appended synchronously before the reply is requested,
//! so thread order is guaranteed by sequential await rather than any
//! synchronization. The reply lands in whichever conversation is current
//! when it resolves. A send with no current conversation is surfaced as a
//! notice, never dropped silently.
//!
//! ERROR HANDLING
//! ==============
//! Attachment reads and the generate call both degrade to fixed assistant
//! messages; nothing here is fatal or retried.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;
use leptos_meta::Title;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::components::navbar::Navbar;
use crate::components::sidebar::Sidebar;
use crate::pages::NOT_IMPLEMENTED_NOTICE;
use crate::state::ai::{AiState, ChatMessage, Sender};

#[cfg(feature = "csr")]
const ATTACHMENT_READ_ERROR: &str = "Error reading attachment.";

// `web_sys::File` is not `Send`, so the picked attachment lives in a
// browser-thread slot instead of a signal; `file_name` carries the reactive
// part the UI needs.
#[cfg(feature = "csr")]
thread_local! {
    static PICKED_FILE: std::cell::RefCell<Option<web_sys::File>> =
        const { std::cell::RefCell::new(None) };
}

/// Display content for the optimistic user message: the typed text, or the
/// attachment's file name when only a file was provided.
fn user_message_content(message: &str, file_name: Option<&str>) -> String {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        file_name.unwrap_or_default().to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Title for the next manually started conversation.
fn next_chat_title(existing: usize) -> String {
    format!("Chat {}", existing + 1)
}

/// Render assistant markdown, dropping raw HTML events from model output.
fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Conversational AI page.
#[component]
pub fn ConversationalAiPage() -> impl IntoView {
    let ai = expect_context::<RwSignal<AiState>>();

    let input = RwSignal::new(String::new());
    let file_name = RwSignal::new(None::<String>);
    let notice = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // First visit with no history: open the default conversation.
    Effect::new(move || {
        if ai.with(|state| state.conversations.is_empty() && state.current.is_none()) {
            ai.update(|state| {
                state.start_new(Some("Security Analysis Chat"));
            });
        }
    });

    // Keep the thread scrolled to the newest message.
    Effect::new(move || {
        let _ = ai.with(|state| state.current().map(|c| c.messages.len()));
        let _ = ai.with(|state| state.loading);

        #[cfg(feature = "csr")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let element: web_sys::HtmlInputElement = event_target(&ev);
            let picked = element.files().and_then(|files| files.get(0));
            file_name.set(picked.as_ref().map(web_sys::File::name));
            PICKED_FILE.with(|slot| *slot.borrow_mut() = picked);
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ev;
        }
    };

    let do_send = move || {
        let typed = input.get();
        let has_attachment = file_name.get().is_some();
        if (typed.trim().is_empty() && !has_attachment) || ai.get().loading {
            return;
        }

        let content = user_message_content(&typed, file_name.get().as_deref());
        let mut appended = Ok(());
        ai.update(|state| {
            appended = state.append_message(ChatMessage::new(content, Sender::User));
            if appended.is_ok() {
                state.loading = true;
            }
        });
        if appended.is_err() {
            notice.set("No active conversation. Start a new chat first.".to_owned());
            return;
        }
        input.set(String::new());
        file_name.set(None);

        #[cfg(feature = "csr")]
        {
            let picked = PICKED_FILE.with(|slot| slot.borrow_mut().take());
            let typed = typed.trim().to_owned();
            leptos::task::spawn_local(async move {
                // Outbound content: the attachment's decoded text wins over
                // the typed message, matching the product behavior.
                let outbound = match picked {
                    Some(f) => match wasm_bindgen_futures::JsFuture::from(f.text()).await {
                        Ok(js) => js.as_string().unwrap_or_default(),
                        Err(_) => {
                            ai.update(|state| {
                                let _ = state
                                    .append_message(ChatMessage::new(ATTACHMENT_READ_ERROR, Sender::Ai));
                                state.loading = false;
                            });
                            return;
                        }
                    },
                    None => typed,
                };

                let reply = crate::net::api::generate_reply(&outbound).await;
                ai.update(|state| {
                    let _ = state.append_message(ChatMessage::new(reply, Sender::Ai));
                    state.loading = false;
                });
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            ai.update(|state| state.loading = false);
        }
    };

    let on_send = move |_| do_send();
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_new_chat = move |_| {
        ai.update(|state| {
            let title = next_chat_title(state.conversations.len());
            state.start_new(Some(&title));
        });
    };
    let on_export = move |_| notice.set(NOT_IMPLEMENTED_NOTICE.to_owned());
    let on_delete = move |ev: leptos::ev::MouseEvent| {
        // Keep the click from also selecting the row.
        ev.stop_propagation();
        notice.set(NOT_IMPLEMENTED_NOTICE.to_owned());
    };

    let can_send =
        move || (!input.get().trim().is_empty() || file_name.get().is_some()) && !ai.get().loading;

    view! {
        <Title text="Conversational AI - SHERPA AI Vulnerability Management"/>
        <div class="page">
            <Navbar/>
            <Sidebar/>
            <main class="page__content">
                <header class="page__header">
                    <div>
                        <h1>"Conversational AI"</h1>
                        <p class="page__subtitle">
                            "Chat with SHERPA's AI for security insights and guidance"
                        </p>
                    </div>
                    <div class="page__header-actions">
                        <button class="btn" on:click=on_export>
                            "Export"
                        </button>
                        <button class="btn btn--primary" on:click=on_new_chat>
                            "+ New Chat"
                        </button>
                    </div>
                </header>

                <Show when=move || !notice.get().is_empty()>
                    <p class="page__notice">{move || notice.get()}</p>
                </Show>

                <div class="chat-layout">
                    <section class="card chat-history">
                        <h2>"Chat History"</h2>
                        <div class="chat-history__list">
                            {move || {
                                ai.get()
                                    .conversations
                                    .into_iter()
                                    .map(|conversation| {
                                        let id = conversation.id.clone();
                                        let is_current =
                                            ai.get().current.as_deref() == Some(conversation.id.as_str());
                                        view! {
                                            <div
                                                class="chat-history__item"
                                                class:chat-history__item--current=is_current
                                                on:click=move |_| {
                                                    let mut selected = Ok(());
                                                    ai.update(|state| {
                                                        selected = state.select(&id);
                                                    });
                                                    if let Err(e) = selected {
                                                        notice.set(e.to_string());
                                                    }
                                                }
                                            >
                                                <span class="chat-history__title">
                                                    {conversation.title.clone()}
                                                </span>
                                                <button class="btn chat-history__delete" on:click=on_delete>
                                                    "Delete"
                                                </button>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </section>

                    <section class="card chat-panel">
                        <h2>"SHERPA AI Assistant"</h2>
                        <p class="card__description">
                            "Ask me anything about vulnerabilities or upload a report to analyze."
                        </p>
                        <div class="chat-panel__messages" node_ref=messages_ref>
                            {move || {
                                let messages = ai
                                    .get()
                                    .current()
                                    .map(|c| c.messages.clone())
                                    .unwrap_or_default();
                                if messages.is_empty() {
                                    return view! {
                                        <div class="chat-panel__empty">
                                            <p class="chat-panel__welcome">"Welcome to SHERPA AI!"</p>
                                            <p>
                                                "I'm here to help you with security analysis and vulnerability management."
                                            </p>
                                        </div>
                                    }
                                        .into_any();
                                }
                                messages
                                    .into_iter()
                                    .map(|msg| {
                                        let is_ai = msg.sender == Sender::Ai;
                                        view! {
                                            <div
                                                class="chat-panel__message"
                                                class:chat-panel__message--ai=is_ai
                                            >
                                                {if is_ai {
                                                    let rendered = render_markdown_html(&msg.content);
                                                    view! {
                                                        <div
                                                            class="chat-panel__markdown"
                                                            inner_html=rendered
                                                        ></div>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! { <span>{msg.content.clone()}</span> }.into_any()
                                                }}
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}

                            {move || {
                                ai.get().loading.then(|| {
                                    view! {
                                        <div class="chat-panel__typing">"SHERPA AI is typing..."</div>
                                    }
                                })
                            }}
                        </div>

                        <div class="chat-panel__input-row">
                            <input
                                class="chat-panel__input"
                                type="text"
                                placeholder="Ask or describe a vulnerability..."
                                disabled=move || ai.get().loading
                                prop:value=move || input.get()
                                on:input=move |ev| input.set(event_target_value(&ev))
                                on:keydown=on_keydown
                            />
                            <input
                                class="chat-panel__file"
                                type="file"
                                accept=".txt,.pdf,.doc,.docx"
                                disabled=move || ai.get().loading
                                on:change=on_file_change
                            />
                            <button
                                class="btn btn--primary chat-panel__send"
                                on:click=on_send
                                disabled=move || !can_send()
                            >
                                "Send"
                            </button>
                        </div>
                    </section>
                </div>
            </main>
        </div>
    }
}
