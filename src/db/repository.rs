//! Everything a command works on, loaded once and saved back explicitly.

use crate::core::directory::Directory;
use crate::core::payments::PaymentLedger;
use crate::core::store::AppointmentStore;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;

#[derive(Debug, Default)]
pub struct Repository {
    pub directory: Directory,
    pub appointments: AppointmentStore,
    pub payments: PaymentLedger,
}

impl Repository {
    pub fn load(pool: &DbPool) -> AppResult<Self> {
        let conn = &pool.conn;
        Ok(Self {
            directory: Directory {
                customers: queries::load_customers(conn)?,
                services: queries::load_services(conn)?,
                staff: queries::load_staff(conn)?,
            },
            appointments: AppointmentStore::new(queries::load_appointments(conn)?),
            payments: PaymentLedger::new(queries::load_payments(conn)?),
        })
    }

    /// Write every table back inside one transaction.
    pub fn save(&self, pool: &mut DbPool) -> AppResult<()> {
        pool.with_conn(|conn| {
            let tx = conn.transaction()?;
            queries::replace_customers(&tx, &self.directory.customers)?;
            queries::replace_services(&tx, &self.directory.services)?;
            queries::replace_staff(&tx, &self.directory.staff)?;
            queries::replace_appointments(&tx, self.appointments.all())?;
            queries::replace_payments(&tx, self.payments.all())?;
            tx.commit()
        })?;
        Ok(())
    }
}
