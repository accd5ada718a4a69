/// Fixed skill vocabulary for the data-engineering job market (German and
/// English labels). Matching is case-insensitive; output keeps this casing
/// and this order. Read-only process-wide configuration.
pub const SKILL_VOCABULARY: &[&str] = &[
    "JavaScript",
    "C++",
    "Data Modeling",
    "AWS",
    "DevOps",
    "Data Science",
    "Big Data",
    "Databricks",
    "Machine Learning",
    "APIs",
    "Spark",
    "Hadoop",
    "CI/CD",
    "Power BI",
    "Data Engineering",
    "ETL",
    "Data Pipelines",
    "Datenmodellierung",
    "Datenmanagement",
    "Data Warehouse",
    "Data Lakehouse",
    "Data Lakes",
    "Datenqualitätsanalyse",
    "Datenentdeckung",
    "OLAP-Würfel",
    "Datenvorbereitung",
    "Datenintegration",
    "Datenanalyse",
    "SQL",
    "T-SQL",
    "SSIS",
    "Apache Hadoop",
    "Apache Kafka",
    "Apache NiFi",
    "Apache Flink",
    "Python",
    "C#",
    "PowerShell",
    "Microsoft SQL Server",
    "Microsoft Azure",
    "Microsoft Power Platform",
    "Microsoft Fabric",
    "Java",
    "Linux",
    "Virtualisierung",
    "Backup-Lösungen",
    "Speicherlösungen",
    "Kommunikationsfähigkeit",
    "Teamarbeit",
    "Problemlösungsfähigkeiten",
    "Kundenorientierung",
    "Strukturierte Arbeitsweise",
    "Kreativität",
    "Flexibilität",
    "Selbstständigkeit",
    "Respekt und Empathie",
    "Deutsch",
    "Englisch",
    "German",
    "English",
    "Technische Ausbildung",
    "Berufserfahrung im Data Engineering",
    "Projekterfahrung",
    "Verständnis von Bankgeschäftsmodellen",
    "projektmanagement",
    "erp",
    "datenmodellen",
    "computer science",
    "data processing",
];
