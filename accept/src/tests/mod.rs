mod test_reconcile;
