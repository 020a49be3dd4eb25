//! # Travel plan dashboard controllers
//!
//! [`PlanList`] is the client's cached copy of the server's plans. It is only
//! ever replaced wholesale by a successful fetch: no merging, no optimistic
//! inserts. A failed fetch is logged and leaves the previous snapshot in place.
//!
//! [`CreatePlanForm`] backs the "Create New Travel Plan" dialog. A successful
//! create clears the title and closes the dialog; the caller then refetches the
//! whole list ([`create_and_refresh`]).
//!
//! The async flows take their state as [`StateCell`]s; the dashboard passes
//! its signals straight in.

use api::{ApiError, NewTravelPlan, Session, TravelBackend, TravelPlan};

use super::StateCell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
}

/// Which parts of the dashboard are shown for the current snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sections {
    /// First fetch still in flight.
    pub loading: bool,
    /// "Continue planning your next journey..." heading.
    pub continue_heading: bool,
    pub previews: bool,
    pub grid: bool,
    /// "No travel plans available."
    pub empty_message: bool,
}

/// Cached snapshot of the plan list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanList {
    plans: Vec<TravelPlan>,
    status: FetchStatus,
    fetched: bool,
}

impl PlanList {
    pub fn plans(&self) -> &[TravelPlan] {
        &self.plans
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Whether at least one fetch has completed, successfully or not.
    pub fn fetched(&self) -> bool {
        self.fetched
    }

    pub fn find(&self, id: i64) -> Option<&TravelPlan> {
        self.plans.iter().find(|p| p.id == id)
    }

    pub fn sections(&self) -> Sections {
        let has_plans = !self.plans.is_empty();
        let loading = !has_plans && self.status == FetchStatus::Loading;
        Sections {
            loading,
            continue_heading: has_plans,
            previews: has_plans,
            grid: has_plans,
            empty_message: !has_plans && !loading,
        }
    }

    pub fn begin_fetch(&mut self) {
        self.status = FetchStatus::Loading;
    }

    /// Replace the snapshot on success; log and keep it on failure.
    pub fn apply_fetch(&mut self, result: Result<Vec<TravelPlan>, ApiError>) -> bool {
        self.status = FetchStatus::Idle;
        self.fetched = true;
        match result {
            Ok(plans) => {
                tracing::debug!(count = plans.len(), "travel plans loaded");
                self.plans = plans;
                true
            }
            Err(e) => {
                tracing::error!("Error fetching travels: {e}");
                false
            }
        }
    }

    /// Fetch the full list and apply it. Without a token nothing is requested
    /// and the snapshot is left untouched.
    pub async fn refresh<B: TravelBackend>(
        mut list: impl StateCell<Self>,
        backend: &B,
        session: &Session,
    ) -> bool {
        if !session.is_authenticated() {
            return false;
        }
        list.update(PlanList::begin_fetch);
        let result = session.list_travel_plans(backend).await;
        list.update(|l| l.apply_fetch(result))
    }
}

/// State of the create-plan dialog.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CreatePlanForm {
    pub title: String,
    pub open: bool,
}

impl CreatePlanForm {
    pub fn open_dialog(&mut self) {
        self.open = true;
    }

    /// Close without submitting. The typed title is kept.
    pub fn close_dialog(&mut self) {
        self.open = false;
    }

    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub fn new_plan(&self) -> NewTravelPlan {
        NewTravelPlan::new(self.title.clone())
    }

    /// On success clear the title and close; on failure log and leave the dialog as is.
    pub fn apply_created(&mut self, result: Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                tracing::info!(title = %self.title, "travel plan created");
                self.title.clear();
                self.open = false;
                true
            }
            Err(e) => {
                tracing::error!("Error creating travel plan: {e}");
                false
            }
        }
    }

    /// POST the typed title and apply the outcome.
    pub async fn submit<B: TravelBackend>(
        mut form: impl StateCell<Self>,
        backend: &B,
        session: &Session,
    ) -> bool {
        let new_plan = form.update(|f| f.new_plan());
        let result = session.create_travel_plan(backend, &new_plan).await;
        form.update(|f| f.apply_created(result))
    }
}

/// Create the plan, then refetch the full list once if the create succeeded.
pub async fn create_and_refresh<B: TravelBackend>(
    form: impl StateCell<CreatePlanForm>,
    list: impl StateCell<PlanList>,
    backend: &B,
    session: &Session,
) -> bool {
    if !CreatePlanForm::submit(form, backend, session).await {
        return false;
    }
    PlanList::refresh(list, backend, session).await;
    true
}
