use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod services;
mod state;

use components::book_detail_modal::BookDetailModal;
use components::book_form_modal::{BookFormModal, FormMode};
use components::book_grid::BookGrid;
use components::header::Header;
use components::pagination::Pagination;
use components::search_bar::SearchBar;
use components::toast_container::ToastContainer;
use hooks::use_library::use_library;
use hooks::use_toasts::use_toasts;
use services::api::ApiClient;
use state::ModalState;

#[function_component(App)]
fn app() -> Html {
    let api_client = use_memo((), |_| ApiClient::new());
    let toasts = use_toasts();
    let library = use_library(&api_client, toasts.notify.clone());
    let state = &library.state;
    let actions = &library.actions;

    let modal = match &state.modal {
        ModalState::Closed => html! {},
        ModalState::Editing(_) => html! {
            <BookFormModal
                mode={FormMode::Edit}
                form={state.edit_form.clone()}
                on_field_change={actions.update_edit_field.clone()}
                on_submit={actions.submit_edit.clone()}
                on_close={actions.close_modal.clone()}
            />
        },
        ModalState::Adding => html! {
            <BookFormModal
                mode={FormMode::Create}
                form={state.create_form.clone()}
                on_field_change={actions.update_create_field.clone()}
                on_submit={actions.submit_create.clone()}
                on_close={actions.close_modal.clone()}
            />
        },
        ModalState::Viewing(book) => html! {
            <BookDetailModal book={book.clone()} on_close={actions.close_modal.clone()} />
        },
    };

    html! {
        <>
            <ToastContainer toasts={toasts.toasts.clone()} on_dismiss={toasts.dismiss.clone()} />
            <Header book_count={state.books.len()} />
            <main class="main">
                <div class="container">
                    <SearchBar
                        query={state.search_query.clone()}
                        on_query_change={actions.set_search_query.clone()}
                        on_search={actions.search.clone()}
                        on_add={actions.open_add.clone()}
                    />
                    <BookGrid
                        books={state.current_page_books().to_vec()}
                        on_open_detail={actions.open_detail.clone()}
                        on_edit={actions.open_edit.clone()}
                        on_delete={actions.delete_book.clone()}
                    />
                    <Pagination
                        page_count={state.page_count()}
                        current_page={state.current_page}
                        on_page={actions.go_to_page.clone()}
                    />
                </div>
            </main>
            {modal}
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
