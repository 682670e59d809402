//! Statement upload panel for `/calc-food`
//!
//! Opens a native file dialog and shows the chosen file name. Parsing and
//! upload happen server-side; this panel only picks the file.

use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn UploadPanel() -> Element {
    let mut selected = use_signal(|| Option::<String>::None);

    let pick_file = move |_: ()| {
        spawn(async move {
            let picked = rfd::AsyncFileDialog::new()
                .add_filter("명세서", &["xlsx", "csv", "pdf"])
                .pick_file()
                .await;

            if let Some(file) = picked {
                tracing::info!(file = %file.file_name(), "Statement file selected");
                selected.set(Some(file.file_name()));
            }
        });
    };

    rsx! {
        section { class: "upload-panel",
            h2 { class: "upload-title", "명세서 업로드" }
            p { class: "upload-hint",
                "CJ프레시웨이·신세계푸드 명세서 파일(xlsx, csv, pdf)을 올려주세요."
            }
            div { class: "upload-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: pick_file,
                    "파일 선택"
                }
            }
            if let Some(file_name) = selected() {
                p { class: "upload-selected", "선택된 파일: {file_name}" }
            }
        }
    }
}
