use js_sys::Uint8Array;
use shared::models::Prescription;
use tracing::warn;
use wasm_bindgen_futures::{JsFuture, spawn_local};
use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::app::use_client;
use crate::components::form_field::TextField;
use crate::components::status_badge::PrescriptionStatusBadge;
use crate::containers::form_validation::{
    PrescriptionUpload, ValidationError, validate_prescription_file,
};
use crate::services::prescriptions;
use crate::shell::NoticeLevel;
use crate::transport::FilePart;

const FALLBACK_MIME: &str = "application/octet-stream";

/// Rejects a selected file by name and reported size before it is buffered.
fn check_selected(file_name: &str, size: f64) -> Result<(), ValidationError> {
    // `File::size` is a JS number; the cast saturates.
    validate_prescription_file(file_name, size as usize)
}

async fn read_file(file: &File) -> Result<FilePart, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|err| format!("{err:?}"))?;
    let mime = file.type_();
    Ok(FilePart {
        field: "file".into(),
        file_name: file.name(),
        mime: if mime.is_empty() { FALLBACK_MIME.into() } else { mime },
        bytes: Uint8Array::new(&buffer).to_vec(),
    })
}

#[derive(Properties, PartialEq)]
pub struct PrescriptionsPageProps {
    pub prescriptions: Vec<Prescription>,
}

#[function_component(PrescriptionsPage)]
pub fn prescriptions_page(props: &PrescriptionsPageProps) -> Html {
    let client = use_client();
    let list = {
        let initial = props.prescriptions.clone();
        use_state(move || initial)
    };
    let doctor_name = use_state(String::new);
    let hospital_name = use_state(String::new);
    let prescription_date = use_state(String::new);
    let uploading = use_state(|| false);
    let file_input = use_node_ref();

    let text_input = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |value: String| handle.set(value))
    };

    let onsubmit = {
        let list = list.clone();
        let doctor_name = doctor_name.clone();
        let hospital_name = hospital_name.clone();
        let prescription_date = prescription_date.clone();
        let uploading = uploading.clone();
        let file_input = file_input.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let client = client.clone();
            let list = list.clone();
            let uploading = uploading.clone();
            let input = file_input.cast::<HtmlInputElement>();
            let selected = input
                .as_ref()
                .and_then(HtmlInputElement::files)
                .and_then(|files| files.get(0));
            let mut upload = PrescriptionUpload {
                doctor_name: (*doctor_name).clone(),
                hospital_name: (*hospital_name).clone(),
                prescription_date: (*prescription_date).clone(),
                file: None,
            };
            let fields = (doctor_name.clone(), hospital_name.clone(), prescription_date.clone());
            uploading.set(true);
            spawn_local(async move {
                if let Some(file) = selected {
                    if let Err(err) = check_selected(&file.name(), file.size()) {
                        client.surface(err.into());
                        uploading.set(false);
                        return;
                    }
                    match read_file(&file).await {
                        Ok(part) => upload.file = Some(part),
                        Err(err) => {
                            warn!(error = %err, "could not read prescription file");
                            client.notify(NoticeLevel::Error, "Could not read the selected file");
                            uploading.set(false);
                            return;
                        }
                    }
                }
                if prescriptions::upload_prescription(&client, &upload).await.is_ok() {
                    let (doctor_name, hospital_name, prescription_date) = fields;
                    doctor_name.set(String::new());
                    hospital_name.set(String::new());
                    prescription_date.set(String::new());
                    if let Some(input) = input {
                        input.set_value("");
                    }
                    if let Ok(refreshed) = prescriptions::list_prescriptions(&client).await {
                        list.set(refreshed);
                    }
                }
                uploading.set(false);
            });
        })
    };

    html! {
        <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
            <form class="card bg-base-200 shadow lg:col-span-1" {onsubmit}>
                <div class="card-body">
                    <h2 class="card-title">{"Upload Prescription"}</h2>
                    <TextField id="doctor-name" label="Doctor name" required=true
                        value={(*doctor_name).clone()} oninput={text_input(&doctor_name)} />
                    <TextField id="hospital-name" label="Hospital / clinic"
                        value={(*hospital_name).clone()} oninput={text_input(&hospital_name)} />
                    <TextField id="prescription-date" label="Prescription date" input_type="date" required=true
                        value={(*prescription_date).clone()} oninput={text_input(&prescription_date)} />
                    <div class="form-control">
                        <label class="label" for="prescription-file">
                            <span class="label-text">{"File (JPG, PNG or PDF, max 10 MB)"}</span>
                        </label>
                        <input
                            id="prescription-file"
                            ref={file_input}
                            class="file-input file-input-bordered"
                            type="file"
                            accept=".jpg,.jpeg,.png,.pdf"
                            required=true
                        />
                    </div>
                    <div class="card-actions justify-end mt-4">
                        <button class="btn btn-primary" type="submit" disabled={*uploading}>
                            { if *uploading { "Uploading..." } else { "Upload" } }
                        </button>
                    </div>
                </div>
            </form>

            <div class="lg:col-span-2 space-y-4">
                <h1 class="text-2xl font-bold">{"My Prescriptions"}</h1>
                if list.is_empty() {
                    <div class="alert"><span>{"No prescriptions uploaded yet"}</span></div>
                }
                { for list.iter().map(|prescription| html! {
                    <div key={prescription.id} class="card bg-base-200 shadow">
                        <div class="card-body">
                            <div class="flex justify-between items-center">
                                <h2 class="card-title">{ format!("Dr. {}", prescription.doctor_name) }</h2>
                                <PrescriptionStatusBadge status={prescription.status} />
                            </div>
                            if let Some(hospital) = &prescription.hospital_name {
                                <div class="text-sm">{ hospital }</div>
                            }
                            <div class="text-sm text-base-content/70">
                                { format!("Dated {}", prescription.prescription_date.0.format("%Y-%m-%d")) }
                            </div>
                            if let Some(file_name) = &prescription.file_name {
                                <div class="text-sm"><i class="fa-solid fa-paperclip"></i>{ format!(" {file_name}") }</div>
                            }
                            if let Some(notes) = &prescription.verification_notes {
                                <p class="text-sm">{ notes }</p>
                            }
                        </div>
                    </div>
                }) }
            </div>
        </div>
    }
}
