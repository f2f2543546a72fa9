use contracts::reports::{DateRange, DateRangeDraft, DateRangePreset};
use leptos::prelude::*;
use thaw::*;

use crate::shared::date_utils::{to_input_value, today_local};

/// Reporting period selector: one button per preset plus two date inputs
/// for a custom range.
///
/// `range` is only written with complete, ordered ranges. While the custom
/// inputs are half-filled or inverted the current range stays in place.
#[component]
pub fn DateRangePicker(
    /// Active reporting window
    range: RwSignal<DateRange>,
    /// Preset that produced `range`, `None` for custom bounds
    active_preset: RwSignal<Option<DateRangePreset>>,
) -> impl IntoView {
    let draft = RwSignal::new(DateRangeDraft::default());
    let draft_error = RwSignal::new(None::<String>);

    let select_preset = move |preset: DateRangePreset| {
        range.set(preset.resolve(today_local()));
        active_preset.set(Some(preset));
        draft.set(DateRangeDraft::default());
        draft_error.set(None);
    };

    let apply_draft = move || match draft.get_untracked().build() {
        Some(Ok(custom)) => {
            draft_error.set(None);
            active_preset.set(None);
            range.set(custom);
        }
        Some(Err(e)) => draft_error.set(Some(e.to_string())),
        None => draft_error.set(None),
    };

    let on_from_input = move |value: String| {
        let mut next = draft.get_untracked();
        match next.set_from_str(&value) {
            Ok(()) => {
                draft.set(next);
                apply_draft();
            }
            Err(e) => draft_error.set(Some(e.to_string())),
        }
    };

    let on_to_input = move |value: String| {
        let mut next = draft.get_untracked();
        match next.set_to_str(&value) {
            Ok(()) => {
                draft.set(next);
                apply_draft();
            }
            Err(e) => draft_error.set(Some(e.to_string())),
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Small class="date-range-picker">
            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <ButtonGroup>
                    {DateRangePreset::all()
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <Button
                                    size=ButtonSize::Small
                                    appearance=move || {
                                        if active_preset.get() == Some(preset) {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Secondary
                                        }
                                    }
                                    on_click=move |_| select_preset(preset)
                                >
                                    {preset.label()}
                                </Button>
                            }
                        })
                        .collect_view()}
                </ButtonGroup>
            </Flex>

            <Flex align=FlexAlign::Center gap=FlexGap::Small>
                <Label>"Từ"</Label>
                <input
                    type="date"
                    prop:value=move || to_input_value(draft.get().from)
                    on:change=move |ev| on_from_input(event_target_value(&ev))
                />
                <Label>"Đến"</Label>
                <input
                    type="date"
                    prop:value=move || to_input_value(draft.get().to)
                    on:change=move |ev| on_to_input(event_target_value(&ev))
                />
                <span class="date-range-picker__label">{move || range.with(|r| r.label().to_string())}</span>
            </Flex>

            {move || draft_error.get().map(|e| view! { <div class="date-range-picker__error">{e}</div> })}
        </Flex>
    }
}
