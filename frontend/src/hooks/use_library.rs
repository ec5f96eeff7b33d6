use shared::{Book, BookField, BookId};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::state::{operations, LibraryAction, LibraryState, Notification};

pub struct UseLibraryResult {
    pub state: LibraryState,
    pub actions: UseLibraryActions,
}

#[derive(Clone)]
pub struct UseLibraryActions {
    pub search: Callback<()>,
    pub set_search_query: Callback<String>,
    pub go_to_page: Callback<usize>,
    pub open_edit: Callback<Book>,
    pub open_add: Callback<()>,
    pub open_detail: Callback<Book>,
    pub close_modal: Callback<()>,
    pub update_edit_field: Callback<(BookField, String)>,
    pub update_create_field: Callback<(BookField, String)>,
    pub submit_edit: Callback<()>,
    pub submit_create: Callback<()>,
    pub delete_book: Callback<BookId>,
}

/// Hook owning the library page state. Every change goes through the
/// `LibraryState` reducer; network flows run as independent local tasks.
#[hook]
pub fn use_library(api_client: &ApiClient, notify: Callback<Notification>) -> UseLibraryResult {
    let library = use_reducer(|| LibraryState::new(date_utils::today()));

    let dispatch = {
        let dispatcher = library.dispatcher();
        use_callback((), move |action: LibraryAction, _| dispatcher.dispatch(action))
    };

    let refresh_books = {
        let api_client = api_client.clone();
        let dispatch = dispatch.clone();
        let notify = notify.clone();
        use_callback((), move |_: (), _| {
            let api_client = api_client.clone();
            let dispatch = dispatch.clone();
            let notify = notify.clone();
            spawn_local(async move {
                operations::refresh_books(&api_client, &dispatch, &notify).await;
            });
        })
    };

    // Reads the query from the state rendered alongside this callback
    let search = {
        let api_client = api_client.clone();
        let dispatch = dispatch.clone();
        let notify = notify.clone();
        let query = library.search_query.clone();
        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let dispatch = dispatch.clone();
            let notify = notify.clone();
            let query = query.clone();
            spawn_local(async move {
                operations::search_books(&api_client, &query, &dispatch, &notify).await;
            });
        })
    };

    let submit_create = {
        let api_client = api_client.clone();
        let dispatch = dispatch.clone();
        let notify = notify.clone();
        let form = library.create_form.clone();
        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let dispatch = dispatch.clone();
            let notify = notify.clone();
            let form = form.clone();
            spawn_local(async move {
                let today = date_utils::today();
                operations::submit_create(&api_client, &form, today, &dispatch, &notify).await;
            });
        })
    };

    let submit_edit = {
        let api_client = api_client.clone();
        let dispatch = dispatch.clone();
        let notify = notify.clone();
        let form = library.edit_form.clone();
        Callback::from(move |_: ()| {
            let api_client = api_client.clone();
            let dispatch = dispatch.clone();
            let notify = notify.clone();
            let form = form.clone();
            spawn_local(async move {
                operations::submit_edit(&api_client, &form, &dispatch, &notify).await;
            });
        })
    };

    let delete_book = {
        let api_client = api_client.clone();
        let dispatch = dispatch.clone();
        let notify = notify.clone();
        use_callback((), move |id: BookId, _| {
            let api_client = api_client.clone();
            let dispatch = dispatch.clone();
            let notify = notify.clone();
            spawn_local(async move {
                let confirm = gloo::dialogs::confirm;
                operations::delete_book(&api_client, id, confirm, &dispatch, &notify).await;
            });
        })
    };

    let set_search_query = dispatch.reform(LibraryAction::SetSearchQuery);
    let go_to_page = dispatch.reform(LibraryAction::GoToPage);
    let open_edit = dispatch.reform(LibraryAction::OpenEdit);
    let open_add = dispatch.reform(|_: ()| LibraryAction::OpenAdd);
    let open_detail = dispatch.reform(LibraryAction::OpenDetail);
    let close_modal = dispatch.reform(|_: ()| LibraryAction::CloseModal);
    let update_edit_field = dispatch.reform(|(field, value): (BookField, String)| {
        LibraryAction::UpdateEditField(field, value)
    });
    let update_create_field = dispatch.reform(|(field, value): (BookField, String)| {
        LibraryAction::UpdateCreateField(field, value)
    });

    // Load the full list once on mount
    use_effect_with((), move |_| {
        refresh_books.emit(());
        || ()
    });

    let actions = UseLibraryActions {
        search,
        set_search_query,
        go_to_page,
        open_edit,
        open_add,
        open_detail,
        close_modal,
        update_edit_field,
        update_create_field,
        submit_edit,
        submit_create,
        delete_book,
    };

    UseLibraryResult {
        state: (*library).clone(),
        actions,
    }
}
