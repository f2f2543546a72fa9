use contracts::publisher::{UploadDraft, WizardStep, MAX_SCREENSHOTS};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use web_sys::{File, HtmlInputElement};

use crate::publisher::{api, draft_storage};
use crate::shared::format::format_vnd;
use crate::shared::remote_data::spawn_action;
use crate::system::auth::context::use_auth;

#[derive(Clone, Copy, PartialEq, Eq)]
enum UploadTarget {
    Cover,
    Build,
    Screenshot,
}

/// Files picked in an `<input type="file">`; the input is reset so the same
/// file can be picked again.
fn take_selected_files(ev: &leptos::ev::Event) -> Vec<File> {
    let input: HtmlInputElement = event_target(ev);
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

/// Publisher game upload: Details -> Media -> Build -> Review.
///
/// The draft is written to local storage on every change and restored on
/// the next visit until it is submitted.
#[component]
pub fn UploadWizard() -> impl IntoView {
    let auth = use_auth();
    let initial = draft_storage::load_or_new();

    let draft = RwSignal::new(initial.clone());
    let title = RwSignal::new(initial.title.clone());
    let description = RwSignal::new(initial.description.clone());
    let category = RwSignal::new(initial.category.clone());
    let price = RwSignal::new(initial.price_input.clone());

    let uploading = RwSignal::new(false);
    let submitting = RwSignal::new(false);
    let feedback = RwSignal::new(None::<String>);
    let submitted = RwSignal::new(false);

    // Text inputs -> draft
    Effect::new(move |_| {
        let (t, d, c, p) = (title.get(), description.get(), category.get(), price.get());
        draft.update(|draft| {
            draft.title = t;
            draft.description = d;
            draft.category = c;
            draft.price_input = p;
        });
    });

    // Draft -> local storage
    Effect::new(move |_| {
        draft.with(draft_storage::save);
    });

    let start_upload = move |target: UploadTarget, files: Vec<File>| {
        if files.is_empty() {
            return;
        }
        uploading.set(true);
        feedback.set(None);
        spawn_local(async move {
            for file in files {
                match api::upload_media(file).await {
                    Ok(url) => {
                        let mut rejected = None;
                        draft.update(|d| match target {
                            UploadTarget::Cover => d.cover_url = Some(url),
                            UploadTarget::Build => d.build_url = Some(url),
                            UploadTarget::Screenshot => {
                                if let Err(e) = d.add_screenshot(url) {
                                    rejected = Some(e.to_string());
                                }
                            }
                        });
                        if let Some(message) = rejected {
                            feedback.set(Some(message));
                            break;
                        }
                    }
                    Err(e) => {
                        log::error!("Media upload failed: {}", e);
                        feedback.set(Some(e.to_string()));
                        break;
                    }
                }
            }
            uploading.set(false);
        });
    };

    let go_next = move |_| {
        let mut result = Ok(WizardStep::Details);
        draft.update(|d| result = d.advance());
        feedback.set(result.err().map(|e| e.to_string()));
    };

    let go_back = move |_| {
        draft.update(|d| {
            d.back();
        });
        feedback.set(None);
    };

    let submit = move |_| {
        let request = match draft.get_untracked().to_create_request() {
            Ok(request) => request,
            Err(e) => {
                feedback.set(Some(e.to_string()));
                return;
            }
        };
        spawn_action(
            auth,
            "create game",
            submitting,
            feedback,
            move |session| api::create_game(session, request),
            move || {
                draft_storage::clear();
                title.set(String::new());
                description.set(String::new());
                category.set(String::new());
                price.set(String::new());
                draft.set(UploadDraft::new());
                submitted.set(true);
            },
        );
    };

    let step = Memo::new(move |_| draft.with(|d| d.step));
    let busy = Signal::derive(move || uploading.get() || submitting.get());

    let step_view = move || match step.get() {
        WizardStep::Details => view! {
            <Flex vertical=true gap=FlexGap::Medium>
                <Label>"Tên game"</Label>
                <Input value=title placeholder="Ví dụ: Sông Núi Kỳ Truyện" />
                <Label>"Mô tả"</Label>
                <Textarea value=description placeholder="Giới thiệu ngắn về game" />
                <Label>"Thể loại"</Label>
                <Input value=category placeholder="RPG, Indie, Chiến thuật..." />
                <Label>"Giá (VND)"</Label>
                <Input value=price placeholder="150.000" />
            </Flex>
        }
        .into_any(),
        WizardStep::Media => view! {
            <Flex vertical=true gap=FlexGap::Medium>
                <Label>"Ảnh bìa"</Label>
                {move || draft.with(|d| d.cover_url.clone()).map(|src| view! {
                    <img class="upload-wizard__cover" src=src alt="cover" />
                })}
                <input
                    type="file"
                    accept="image/*"
                    disabled=move || busy.get()
                    on:change=move |ev| start_upload(UploadTarget::Cover, take_selected_files(&ev))
                />
                <Label>{format!("Ảnh chụp màn hình (tối đa {})", MAX_SCREENSHOTS)}</Label>
                <div class="upload-wizard__screenshots">
                    {move || {
                        draft
                            .with(|d| d.screenshot_urls.clone())
                            .into_iter()
                            .enumerate()
                            .map(|(index, src)| view! {
                                <div class="upload-wizard__screenshot">
                                    <img src=src alt="" />
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Subtle
                                        on_click=move |_| draft.update(|d| d.remove_screenshot(index))
                                    >
                                        "Xóa"
                                    </Button>
                                </div>
                            })
                            .collect_view()
                    }}
                </div>
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    disabled=move || busy.get()
                    on:change=move |ev| start_upload(UploadTarget::Screenshot, take_selected_files(&ev))
                />
            </Flex>
        }
        .into_any(),
        WizardStep::Build => view! {
            <Flex vertical=true gap=FlexGap::Medium>
                <Label>"Bản build (.zip)"</Label>
                <input
                    type="file"
                    accept=".zip,.rar,.7z"
                    disabled=move || busy.get()
                    on:change=move |ev| start_upload(UploadTarget::Build, take_selected_files(&ev))
                />
                {move || match draft.with(|d| d.build_url.clone()) {
                    Some(url) => view! { <a href=url target="_blank">"Đã tải bản build"</a> }.into_any(),
                    None => view! { <span>"Chưa có bản build"</span> }.into_any(),
                }}
            </Flex>
        }
        .into_any(),
        WizardStep::Review => {
            let d = draft.get_untracked();
            let price_text = d
                .price()
                .map(|p| format_vnd(Some(p)))
                .unwrap_or_else(|e| e.to_string());
            view! {
                <dl class="upload-wizard__review">
                    <dt>"Tên game"</dt><dd>{d.title.clone()}</dd>
                    <dt>"Thể loại"</dt><dd>{d.category.clone()}</dd>
                    <dt>"Giá"</dt><dd>{price_text}</dd>
                    <dt>"Ảnh chụp màn hình"</dt><dd>{d.screenshot_urls.len()}</dd>
                    <dt>"Bản build"</dt><dd>{d.build_url.clone().unwrap_or_default()}</dd>
                </dl>
            }
            .into_any()
        }
    };

    view! {
        <div class="page upload-wizard">
            <div class="page__header">
                <h1 class="page__title">"Tải game lên"</h1>
            </div>

            <ol class="upload-wizard__steps">
                {WizardStep::all()
                    .into_iter()
                    .map(|s| view! {
                        <li
                            class="upload-wizard__step"
                            class:upload-wizard__step--active=move || step.get() == s
                            class:upload-wizard__step--done={move || step.get().index() > s.index()}
                        >
                            {format!("{}. {}", s.index() + 1, s.label())}
                        </li>
                    })
                    .collect_view()}
            </ol>

            <Show when=move || submitted.get()>
                <div class="page__feedback page__feedback--success">
                    "Đã gửi game. Game sẽ hiển thị sau khi được quản trị viên duyệt."
                </div>
            </Show>
            {move || feedback.get().map(|msg| view! { <div class="page__feedback">{msg}</div> })}
            <Show when=move || uploading.get()>
                <Flex align=FlexAlign::Center gap=FlexGap::Small>
                    <Spinner size=SpinnerSize::Tiny />
                    <span>"Đang tải lên..."</span>
                </Flex>
            </Show>

            <Card class="upload-wizard__body">{step_view}</Card>

            <Flex justify=FlexJustify::SpaceBetween class="upload-wizard__nav">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || busy.get() || step.get() == WizardStep::Details)
                    on_click=go_back
                >
                    "Quay lại"
                </Button>
                <Show
                    when=move || step.get() == WizardStep::Review
                    fallback=move || view! {
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=busy
                            on_click=go_next
                        >
                            "Tiếp tục"
                        </Button>
                    }
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=busy
                        on_click=submit
                    >
                        {move || if submitting.get() { "Đang gửi..." } else { "Gửi duyệt" }}
                    </Button>
                </Show>
            </Flex>
        </div>
    }
}
