//! Application wiring: one dispatcher, every store, and the actions that
//! drive them.

use std::sync::Arc;

use crate::actions::{DataTypeSource, FileDataTypeSource, ReportActions};
use crate::config::Config;
use crate::flux::Dispatcher;
use crate::stores::{
    AgencyFinderStore, DataTypesStore, FiscalYearsStore, FormStore, ReportDataStore,
};
use crate::transport::{HttpTransport, Transport, TransportError};

pub struct AppContext {
    pub dispatcher: Arc<Dispatcher>,
    pub data_types: Arc<DataTypesStore>,
    pub form: Arc<FormStore>,
    pub agency_finder: Arc<AgencyFinderStore>,
    pub fiscal_years: Arc<FiscalYearsStore>,
    pub report_data: Arc<ReportDataStore>,
    pub actions: ReportActions,
}

impl AppContext {
    /// Wire stores and actions around the given collaborators.
    pub fn new(
        config: &Config,
        transport: Arc<dyn Transport>,
        data_types: Arc<dyn DataTypeSource>,
    ) -> Self {
        let dispatcher = Arc::new(Dispatcher::new());
        let form = FormStore::register(&dispatcher);
        let actions = ReportActions::new(
            Arc::clone(&dispatcher),
            transport,
            data_types,
            Arc::clone(&form),
            config.report.clone(),
        );

        Self {
            data_types: DataTypesStore::register(&dispatcher),
            agency_finder: AgencyFinderStore::register(&dispatcher),
            fiscal_years: FiscalYearsStore::register(&dispatcher),
            report_data: ReportDataStore::register(&dispatcher),
            form,
            dispatcher,
            actions,
        }
    }

    /// Context talking to the configured API and reading the catalog from
    /// disk.
    pub fn from_config(config: &Config) -> Result<Self, TransportError> {
        let transport = HttpTransport::new(&config.api)?;
        let source = FileDataTypeSource::new(&config.report.data_types_path);
        Ok(Self::new(config, Arc::new(transport), Arc::new(source)))
    }
}
