use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    pub children: Children,
    #[prop_or_default]
    pub actions: Option<Html>,
}

/// A daisyUI modal rendered open; the parent unmounts it to close.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open" role="dialog">
            <div class="modal-box max-w-2xl">
                <button class="btn btn-sm btn-circle btn-ghost absolute right-2 top-2" onclick={close.clone()}>
                    <i class="fa-solid fa-xmark"></i>
                </button>
                <h3 class="font-bold text-lg mb-4">{ props.title.clone() }</h3>
                { props.children.clone() }
                <div class="modal-action">
                    { props.actions.clone().unwrap_or_default() }
                    <button class="btn" onclick={close.clone()}>{"Close"}</button>
                </div>
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
