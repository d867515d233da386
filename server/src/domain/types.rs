/// An extracurricular activity students can join.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i32,
}

impl Activity {
    /// Whether `enrolled` students fill every seat. A non-positive capacity
    /// never admits anyone.
    pub fn is_full(&self, enrolled: u64) -> bool {
        if self.max_participants <= 0 {
            return true;
        }
        enrolled >= self.max_participants as u64
    }
}

/// One student's membership in one activity.
#[derive(Debug, Clone)]
pub struct Enrollment {
    pub id: i32,
    pub activity_id: i32,
    pub email: String,
}

/// An activity together with the emails currently enrolled in it.
#[derive(Debug, Clone)]
pub struct ActivityRoster {
    pub activity: Activity,
    pub participants: Vec<String>,
}
